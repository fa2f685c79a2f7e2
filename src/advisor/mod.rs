//! Advisor views
//!
//! Dashboard-level operations composed from the query engine and analytics:
//! the global filter panel, overview KPIs, explorer, investment finder,
//! business recommender, risk-return quadrant, city comparison and the ROI
//! estimate.
//!
//! Every view reads an immutable table and returns a fresh result. An empty
//! result is a valid outcome, never an error.

mod cities;
mod explorer;
mod finder;
mod overview;
mod panel;
mod recommender;
mod risk_return;
mod roi;

pub use cities::{compare_cities, CITY_METRICS};
pub use explorer::{ExplorerPage, ExplorerView};
pub use finder::{find_opportunities, FinderCriteria, FinderResult};
pub use overview::{overview, Overview};
pub use panel::PanelFilter;
pub use recommender::{recommend, Priority, Recommendation, RecommenderRequest, RecommenderResult};
pub use risk_return::{best_opportunities, BestOpportunities};
pub use roi::{estimate_roi, RoiAssumptions, RoiEstimate, RoiOutcome, DAYS_PER_MONTH, RUPEES_PER_LAKH};
