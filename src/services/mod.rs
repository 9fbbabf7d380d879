//! Page services: mock generators and the operations that store their
//! results in page state.

pub mod audit;
pub mod competitors;
pub mod dashboard;
pub mod export;
pub mod keywords;
pub mod rankings;
pub mod run;
