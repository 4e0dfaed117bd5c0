//! proctor - interview integrity scanner
//!
//! Checks the local machine for extra displays, screen sharing software,
//! extra keyboards and the Interview Coder assistant.

use anyhow::Result;

fn main() -> Result<()> {
    proctor_cli::runtime::block_on(proctor_cli::run())?
}
