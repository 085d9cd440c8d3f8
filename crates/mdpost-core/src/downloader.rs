//! Streamed HTTP GET for a single asset.
//!
//! Fetches the resolved URL and writes the body to the reserved asset file
//! as chunks arrive. Only HTTP 200 counts as success; any transport error,
//! timeout, or other status degrades to a per-asset failure.

use std::cell::{Cell, RefCell};
use std::io;
use std::time::Duration;

use crate::error::AssetError;
use crate::storage::AssetWriter;

/// Downloads `url` into `writer`, sequentially from offset 0. Returns the
/// number of bytes written. Runs in the current thread; call from
/// `spawn_blocking` when used from async code.
pub fn fetch_asset(url: &str, writer: &AssetWriter, timeout: Duration) -> Result<u64, AssetError> {
    let offset = Cell::new(0u64);
    let storage_err: RefCell<Option<io::Error>> = RefCell::new(None);

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            let off = offset.get();
            match writer.write_at(off, data) {
                Ok(()) => {
                    offset.set(off + data.len() as u64);
                    Ok(data.len())
                }
                Err(e) => {
                    *storage_err.borrow_mut() = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform().map_err(|e| {
            // A write failure surfaces as a curl abort; report the real cause.
            match storage_err.borrow_mut().take() {
                Some(io_err) => AssetError::Storage(io_err),
                None => AssetError::Curl(e),
            }
        })?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(AssetError::Http(code));
    }

    writer.sync()?;
    Ok(offset.get())
}
