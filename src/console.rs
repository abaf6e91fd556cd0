use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{self, Stylize},
    terminal,
};
use sparselife::{CellWindow, GameOfLife, LiveSet, Pos2, engine::Mode};
use std::io;

pub enum ConsoleCommand {
    Exit,
    TogglePause,
    Insert(Pos2),
    Erase(Pos2),
    Clear,
    Handled,
}

/// Largest number of cells a single character may stand for, per side
const MAX_SCALE: u32 = 64;

/// Maps between grid cells and terminal characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    tl: Pos2,
    /// cells per character, per side
    scale: u32,
}
impl Viewport {
    fn window<'a>(&self, alive: &'a LiveSet, cols: u16, rows: u16) -> CellWindow<'a> {
        CellWindow::new(
            alive,
            self.tl,
            u32::from(cols) * self.scale,
            u32::from(rows) * self.scale,
        )
    }

    /// Character holding `pos`, which must be inside the rendered window
    fn grid_to_screen(&self, pos: Pos2) -> (u16, u16) {
        let scale = i64::from(self.scale);
        let x = (i64::from(pos.x) - i64::from(self.tl.x)) / scale;
        let y = (i64::from(pos.y) - i64::from(self.tl.y)) / scale;
        (x as u16, y as u16)
    }

    fn screen_to_grid(&self, column: u16, row: u16) -> Pos2 {
        let scale = self.scale as i32;
        self.tl
            + Pos2 {
                x: i32::from(column) * scale,
                y: i32::from(row) * scale,
            }
    }

    /// Pans by one character in the given direction
    fn pan(&mut self, dx: i32, dy: i32) {
        let scale = self.scale as i32;
        self.tl = self.tl + Pos2 { x: dx * scale, y: dy * scale };
    }

    fn zoom_in(&mut self) {
        self.scale = (self.scale / 2).max(1);
    }

    fn zoom_out(&mut self) {
        self.scale = (self.scale * 2).min(MAX_SCALE);
    }
}
impl Default for Viewport {
    fn default() -> Self {
        Self {
            tl: Pos2::default(),
            scale: 1,
        }
    }
}

pub struct ConsoleRender {
    view: Viewport,
    mouse: Option<Pos2>,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide, EnableMouseCapture)?;
        Ok(Self {
            view: Viewport::default(),
            mouse: None,
            report: String::new(),
        })
    }

    pub fn render(&self, game: &GameOfLife) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // the last row is reserved for the footer
        let rows = rows.saturating_sub(1);
        let window = self.view.window(game.live_set(), cols, rows);
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in window.iter() {
            let (x, y) = self.view.grid_to_screen(cell);
            queue!(stdout, cursor::MoveTo(x, y))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        // highlight the cell an edit would land on
        if let Some(mouse) = self.mouse.filter(|&m| window.contains(m)) {
            let (x, y) = self.view.grid_to_screen(mouse);
            let glyph = if game.live_set().contains(mouse) { "█" } else { "▒" };
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                style::PrintStyledContent(glyph.yellow())
            )?;
        }

        // write footer
        let mode = match game.mode() {
            Mode::Paused => "paused",
            Mode::RunningCold => "cold",
            Mode::RunningWarm => "warm",
        };
        queue!(stdout, cursor::MoveTo(0, rows))?;
        let footer = format!("[{} 1:{}] {}", mode, self.view.scale, self.report);
        io::Write::write_all(&mut stdout, footer.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let cmd = match event::read()? {
            // key releases are reported on some platforms
            event::Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => ConsoleCommand::Handled,
            // CTRL+C or ESC
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Esc, ..
            }) => ConsoleCommand::Exit,
            event::Event::Key(KeyEvent {
                code: KeyCode::Char(' '),
                ..
            }) => ConsoleCommand::TogglePause,
            event::Event::Key(KeyEvent {
                code: KeyCode::Tab, ..
            }) => ConsoleCommand::Clear,
            // arrows or WASD to move grid, +/- to zoom
            event::Event::Key(KeyEvent { code, .. }) => {
                match code {
                    KeyCode::Up | KeyCode::Char('w') => self.view.pan(0, -1),
                    KeyCode::Down | KeyCode::Char('s') => self.view.pan(0, 1),
                    KeyCode::Left | KeyCode::Char('a') => self.view.pan(-1, 0),
                    KeyCode::Right | KeyCode::Char('d') => self.view.pan(1, 0),
                    KeyCode::Char('+') | KeyCode::Char('=') => self.view.zoom_in(),
                    KeyCode::Char('-') => self.view.zoom_out(),
                    _ => {}
                }
                ConsoleCommand::Handled
            }
            event::Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => {
                let pos = self.view.screen_to_grid(column, row);
                self.mouse = Some(pos);
                match kind {
                    MouseEventKind::Down(MouseButton::Left)
                    | MouseEventKind::Drag(MouseButton::Left) => ConsoleCommand::Insert(pos),
                    MouseEventKind::Down(MouseButton::Right)
                    | MouseEventKind::Drag(MouseButton::Right) => ConsoleCommand::Erase(pos),
                    _ => ConsoleCommand::Handled,
                }
            }
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), DisableMouseCapture, cursor::Show).expect("enable cursor");
    }
}
