//! Dispatch gateway: deploy/retrieve orders against the mission subsystem.

mod gateway;
mod result_log;
mod results;


pub use gateway::{dispatch, dispatch_deploy, dispatch_retrieve};
pub use result_log::{DispatchLog, OutcomeTally};
pub use results::{DispatchOutcome, DispatchRecord, DispatchVerb};
