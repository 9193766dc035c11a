pub mod calc;
pub mod cli;
pub mod ctx;
pub mod error;
pub mod factors;
pub mod io;
pub mod pipeline;
pub mod scenario;
pub mod schema;
pub mod session;

pub use calc::{WorkflowOutputs, evaluate};
pub use error::CalcError;
pub use scenario::WorkflowInputs;
