//! Logger module
//!
//! Provides logging utilities for the contact server including:
//! - Server lifecycle logging
//! - Contact change events
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
mod level;
pub mod writer;

pub use format::AccessLogEntry;
pub use level::LogLevel;

use crate::config::Config;
use crate::store::Contact;
use std::io;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> io::Result<()> {
    let level = config
        .logging
        .level
        .parse::<LogLevel>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write a leveled message, falling back to stdout/stderr before `init`
fn write(level: LogLevel, message: &str) {
    if let Some(w) = writer::get() {
        w.write(level, message);
    } else if level <= LogLevel::Warn {
        eprintln!("{message}");
    } else if level == LogLevel::Info {
        println!("{message}");
    }
}

fn write_info(message: &str) {
    write(LogLevel::Info, message);
}

/// Write to access log specifically
fn write_access(message: &str) {
    if let Some(w) = writer::get() {
        w.write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let rule = "=".repeat(50);
    write_info(&rule);
    write_info(&format!("✓ Server running on http://{addr}"));
    write_info(&format!("✓ API available at http://{addr}/api/contacts"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&rule);
    write_info("Waiting for requests...\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write(
        LogLevel::Debug,
        &format!("[Connection] Accepted from: {peer_addr}"),
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write(LogLevel::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write(LogLevel::Warn, &format!("[WARN] {message}"));
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_debug(message: &str) {
    write(LogLevel::Debug, &format!("[DEBUG] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_contact_created(contact: &Contact) {
    log_info(&format!("Contact created: {contact:?}"));
}

pub fn log_contact_updated(contact: &Contact) {
    log_info(&format!("Contact updated: {contact:?}"));
}

pub fn log_contact_deleted(contact: &Contact) {
    log_info(&format!("Contact deleted: {contact:?}"));
}

pub fn log_shutdown_started(active: usize, grace_secs: u64) {
    log_info(&format!(
        "Shutting down: {active} active connection(s), waiting up to {grace_secs}s"
    ));
}

pub fn log_shutdown_complete(remaining: usize) {
    if remaining == 0 {
        log_info("All connections closed, server stopped");
    } else {
        log_warning(&format!(
            "Grace period elapsed with {remaining} connection(s) still open, server stopped"
        ));
    }
}
