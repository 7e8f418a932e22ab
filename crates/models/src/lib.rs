pub mod db;
pub mod group;
