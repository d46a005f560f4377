//! Terminal output for framebuffers.
//!
//! Each draw is encoded into one byte buffer and written with a single flush.
//! The first draw after start or a resize repaints the whole screen; later
//! draws send only the spans of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` means the next present repaints
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode on the alternate screen, cursor hidden, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Put the terminal back the way the shell expects it. Also fine after a
    /// failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        self.shown = None;
        Ok(())
    }

    /// Make the next `present` repaint everything.
    pub fn force_repaint(&mut self) {
        self.shown = None;
    }

    /// Put `fb` on screen.
    ///
    /// On return `fb` holds the frame that was on screen before (or a blank
    /// one of the same size), so the caller can render the next frame into it
    /// without allocating.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut back = match self.shown.take() {
            Some(shown) if same_size(&shown, fb) => {
                encode_changes(&shown, fb, &mut self.out)?;
                shown
            }
            _ => {
                encode_repaint(fb, &mut self.out)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        std::mem::swap(&mut back, fb);
        self.shown = Some(back);
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Clear the screen and write every cell of `fb` into `out`.
pub fn encode_repaint(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?
        .queue(cursor::MoveTo(0, 0))?;

    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        if y > 0 {
            painter.out.queue(Print("\r\n"))?;
        }
        for x in 0..fb.width() {
            painter.paint(fb.get(x, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Write into `out` only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes cannot be compared and get a repaint.
pub fn encode_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !same_size(prev, next) {
        return encode_repaint(next, out);
    }

    let mut painter = Painter::new(out);
    for span in changed_spans(prev, next) {
        painter.out.queue(cursor::MoveTo(span.x, span.y))?;
        for x in span.x..span.x + span.len {
            painter.paint(next.get(x, span.y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Horizontal stretch of changed cells on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    x: u16,
    y: u16,
    len: u16,
}

/// Maximal spans where `next` differs from `prev`, row by row. Both frames
/// must have the same size.
fn changed_spans<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Span> + 'a {
    let width = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x == width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some(Span {
                x: start,
                y,
                len: x - start,
            })
        })
    })
}

/// Prints cells, sending style changes only when the style actually changes
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            self.out
                .queue(SetForegroundColor(color(style.fg)))?
                .queue(SetBackgroundColor(color(style.bg)))?
                .queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    /// Leave the terminal in its default style if anything was painted.
    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            self.out
                .queue(ResetColor)?
                .queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
