//! Общие типы консоли учёта активов: сущности REST API, схемы форм,
//! клиент коллекций, сессия и навигация.

pub mod domain;
pub mod shared;
pub mod system;
