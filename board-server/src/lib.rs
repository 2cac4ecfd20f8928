//! Station departure board server.
//!
//! A web application that shows the next few departures for a single
//! station, one section per direction, from static timetable tables.

pub mod board;
pub mod domain;
pub mod timetable;
pub mod web;
