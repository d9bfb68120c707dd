mod runner;


pub(crate) use runner::{run_local, run_with_sender};
