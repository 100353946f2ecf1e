//! HTTP API module for the allowance engine.
//!
//! This module provides the REST endpoints for maintaining employees,
//! master rates, budget rows, line items, and holidays, and for running
//! the allowance calculators over the stored records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CompanyTripRequest, SpecialAssistRequest, YearQuery, YearRequest};
pub use response::{ApiError, ApiErrorResponse, SpecialAssistItemRow};
pub use state::AppState;
