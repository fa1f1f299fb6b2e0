use console::{Style, Term};
use starstack_core::frame::{Frame, RoughPick};
use starstack_core::pick::StarPicker;
use tracing::warn;

/// Reads star positions typed at the terminal as `x y`.
///
/// The brightest pixel of the frame is offered as a hint since frames are
/// not rendered.
pub struct TerminalPicker {
    term: Term,
    label: Style,
    hint: Style,
    error: Style,
}

impl TerminalPicker {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            label: Style::new().cyan().bold(),
            hint: Style::new().dim(),
            error: Style::new().red(),
        }
    }
}

impl StarPicker for TerminalPicker {
    fn pick(&mut self, frame: &Frame, label: &str) -> Option<RoughPick> {
        let (width, height) = (frame.width(), frame.height());
        let (bx, by) = brightest_pixel(frame);

        loop {
            let prompt = format!(
                "  {} [{}x{}] {} x y: ",
                self.label.apply_to(label),
                width,
                height,
                self.hint
                    .apply_to(format!("(brightest {} {}, empty or 's' skips)", bx, by)),
            );
            if let Err(e) = self.term.write_str(&prompt) {
                warn!(error = %e, "Terminal write failed");
                return None;
            }
            let line = match self.term.read_line() {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Terminal read failed, treating as skip");
                    return None;
                }
            };

            match parse_pick(&line, width, height) {
                Ok(pick) => return pick,
                Err(msg) => {
                    let _ = self.term.write_line(&format!("  {}", self.error.apply_to(msg)));
                }
            }
        }
    }
}

/// Parse `x y` (or `x,y`) into a pick inside a `width` x `height` frame.
///
/// An empty line or `s`/`skip` yields `Ok(None)`.
fn parse_pick(line: &str, width: usize, height: usize) -> Result<Option<RoughPick>, String> {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("s") || line.eq_ignore_ascii_case("skip") {
        return Ok(None);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [x, y] = parts.as_slice() else {
        return Err(format!("expected two numbers, got '{}'", line));
    };
    let x: i64 = x.parse().map_err(|_| format!("invalid x coordinate '{}'", x))?;
    let y: i64 = y.parse().map_err(|_| format!("invalid y coordinate '{}'", y))?;

    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return Err(format!("({}, {}) is outside the {}x{} frame", x, y, width, height));
    }
    Ok(Some(RoughPick::new(x, y)))
}

fn brightest_pixel(frame: &Frame) -> (usize, usize) {
    let luminance = frame.luminance();
    let mut best = (0, 0);
    let mut best_value = f32::NEG_INFINITY;
    for ((row, col), &v) in luminance.indexed_iter() {
        if v > best_value {
            best_value = v;
            best = (col, row);
        }
    }
    best
}
