pub mod diaper_log_mapper;

pub use diaper_log_mapper::DiaperLogMapper;
