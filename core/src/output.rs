//! Rendering of a completed call to standard output.

use std::io::{self, Write};

use crate::http::{HttpRequest, HttpResponse};

/// Write the requested URL on its own line, then the response body exactly
/// as received, then a newline. The status code does not change the output.
pub fn write_response<W: Write>(out: &mut W, request: &HttpRequest, response: &HttpResponse) -> io::Result<()> {
    writeln!(out, "URL: {}", request.url)?;
    out.write_all(&response.body)?;
    out.write_all(b"\n")?;
    out.flush()
}
