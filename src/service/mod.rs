pub mod http;
pub mod mock;
pub mod traits;

pub use http::HttpAnalysisService;
pub use mock::MockAnalysisService;
pub use traits::AnalysisService;
