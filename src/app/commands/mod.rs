pub mod generate;
mod report;
