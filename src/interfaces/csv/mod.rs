pub mod rate_change_reader;
pub mod schedule_writer;
