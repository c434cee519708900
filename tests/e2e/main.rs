//! End-to-end tests for the Rosetta endpoints.
//!
//! Each test provisions a database pool and a server wired to it, drives
//! requests through the router in-process and tears everything down again.
//! The pool targets the database named by `ROSETTA_TEST_DB_URL`; it connects
//! lazily, so endpoints that don't touch the database run without a live
//! Postgres instance.
//!
//! ```bash
//! cargo test --test e2e
//! ```

mod harness;
mod network_list;
