//! Application services (driving ports).

pub mod device_service;
