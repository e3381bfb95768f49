//! Unit test harness mirroring the library module layout

mod io;
