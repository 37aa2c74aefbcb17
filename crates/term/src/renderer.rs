//! TerminalRenderer: composes frames into a framebuffer and flushes them to a
//! terminal.
//!
//! Every `refresh` diffs the new frame against the previously flushed one and
//! only emits changed runs. A flash rings the terminal bell and shows the frame
//! with inverted colors; the following refresh repaints it normally.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::ports::Renderer;
use crate::core::render::PANEL_COL;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::cell_glyph;
use crate::types::{CellValue, BOARD_HEIGHT, CELL_COLUMNS};

/// Terminal columns used by one frame
pub const FRAME_WIDTH: u16 = PANEL_COL + 22;

/// Terminal rows used by one frame
pub const FRAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;

const BELL: &str = "\x07";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Frame under construction
    next: FrameBuffer,
    /// Last flushed frame
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    flash_pending: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Switch the terminal to raw mode on the alternate screen
    pub fn enter() -> Result<Self> {
        let mut renderer = Self::with_writer(io::stdout());
        terminal::enable_raw_mode()?;
        renderer.buf.clear();
        renderer.buf.queue(terminal::EnterAlternateScreen)?;
        renderer.buf.queue(cursor::Hide)?;
        renderer.buf.queue(terminal::DisableLineWrap)?;
        renderer.flush_buf()?;
        Ok(renderer)
    }

    /// Restore the terminal; safe to call after a failed frame
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into an arbitrary writer without touching terminal modes
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            next: FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            flash_pending: false,
        }
    }

    /// Force the next refresh to be a full redraw
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Frame being composed
    pub fn frame(&self) -> &FrameBuffer {
        &self.next
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear_screen(&mut self) {
        self.next.clear();
    }

    fn draw_cell(&mut self, x: i16, y: i16, kind: CellValue) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        let (glyph, style) = cell_glyph(kind);
        let col = x * CELL_COLUMNS;
        for (dx, ch) in glyph.into_iter().enumerate() {
            self.next.set(col + dx as u16, y, Cell { ch, style });
        }
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) {
        self.next.put_str(col, row, text, CellStyle::TEXT);
    }

    fn flash(&mut self) {
        self.flash_pending = true;
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.buf.clear();
        if mem::take(&mut self.flash_pending) {
            self.next.invert();
            self.buf.extend_from_slice(BELL.as_bytes());
        }

        match self.last.take() {
            Some(mut prev) => {
                encode_diff_into(&prev, &self.next, &mut self.buf)?;
                mem::swap(&mut prev, &mut self.next);
                self.last = Some(prev);
            }
            None => {
                encode_full_into(&self.next, &mut self.buf)?;
                self.last = Some(self.next.clone());
            }
        }
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
