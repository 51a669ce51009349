pub mod clear_results_routine;
pub mod full_sync_routine;
