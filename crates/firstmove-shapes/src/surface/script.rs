use std::io::Write;

use crate::scene::ShapeList;

use super::{DrawingSurface, SurfaceError};

/// Variable name of the board widget in page scripts.
pub const DEFAULT_BINDING: &str = "ground";

/// Surface that writes one `<binding>.setShapes([...]);` statement per call.
///
/// Output is meant to be spliced into a page script driving the board widget.
/// Write and serialization failures are logged and kept in
/// [`last_error`](Self::last_error).
#[derive(Debug)]
pub struct ScriptSurface<W: Write> {
    out: W,
    binding: String,
    last_error: Option<SurfaceError>,
}

impl<W: Write> ScriptSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, binding: DEFAULT_BINDING.to_string(), last_error: None }
    }

    /// Sets the variable name the statement is called on.
    pub fn binding(mut self, name: impl Into<String>) -> Self {
        self.binding = name.into();
        self
    }

    pub fn last_error(&self) -> Option<&SurfaceError> {
        self.last_error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<SurfaceError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, shapes: &ShapeList) -> Result<(), SurfaceError> {
        let json = serde_json::to_string(shapes)?;
        writeln!(self.out, "{}.setShapes({json});", self.binding)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DrawingSurface for ScriptSurface<W> {
    fn set_shapes(&mut self, shapes: ShapeList) {
        if let Err(e) = self.emit(&shapes) {
            log::warn!("ScriptSurface: {e}");
            self.last_error = Some(e);
        }
    }
}

/// Surface that writes each shape set as a JSON array, one per call.
#[derive(Debug)]
pub struct JsonSurface<W: Write> {
    out: W,
    pretty: bool,
    last_error: Option<SurfaceError>,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false, last_error: None }
    }

    /// Multi-line indented output instead of one array per line.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn last_error(&self) -> Option<&SurfaceError> {
        self.last_error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<SurfaceError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, shapes: &ShapeList) -> Result<(), SurfaceError> {
        let mut json = if self.pretty {
            serde_json::to_vec_pretty(shapes)?
        } else {
            serde_json::to_vec(shapes)?
        };
        json.push(b'\n');
        self.out.write_all(&json)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DrawingSurface for JsonSurface<W> {
    fn set_shapes(&mut self, shapes: ShapeList) {
        if let Err(e) = self.emit(&shapes) {
            log::warn!("JsonSurface: {e}");
            self.last_error = Some(e);
        }
    }
}
