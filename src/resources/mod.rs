//! CRUD resource listings shown next to the content editor.
//!
//! Admin list screens (events, UMKM listings, destinations, gallery) page
//! through server-side results with search, category and status filters.
//! This module holds the pieces of that flow that do not depend on a
//! transport: the query model, the page model, the list controller, and the
//! date-derived event status.

pub mod controller;
pub mod event;
pub mod query;
pub mod status;

pub use controller::{ResourceListController, ResourceSource};
pub use event::{Event, EventCatalog, EventListing};
pub use query::{Page, ResourceQuery};
pub use status::{derive_status, EventStatus};
