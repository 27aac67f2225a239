//! Inspector application state and event loop

use crate::context::CompileContext;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tree,
    Symbols,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Tree,
        }
    }
}

/// The inspector state. Owns the context it displays.
pub struct App {
    pub context: CompileContext,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tree_scroll: usize,
    pub symbols_scroll: usize,

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    pub fn new(context: CompileContext) -> Self {
        App {
            context,
            focused_pane: FocusedPane::Tree,
            tree_scroll: 0,
            symbols_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Draw every pane into `frame`
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        super::panes::render_tree_pane(
            frame,
            columns[0],
            self.context.root(),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_symbols_pane(
            frame,
            columns[1],
            self.context.symbols(),
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.context.root().map_or(0, |root| root.node_count()),
            self.context.symbols().len(),
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                self.status_message = match self.focused_pane {
                    FocusedPane::Tree => "Tree focused".to_string(),
                    FocusedPane::Symbols => "Symbols focused".to_string(),
                };
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Symbols => &mut self.symbols_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{create_binary_op_node, create_int_node};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample_app() -> App {
        let mut ctx = CompileContext::new();
        ctx.set_root(create_binary_op_node(
            "+",
            create_int_node(2),
            create_int_node(3),
        ));
        ctx.symbols_mut().insert("alpha", "int", 5, 3);
        App::new(ctx)
    }

    #[test]
    fn test_render_panes() {
        let mut app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("Syntax Tree"));
        assert!(screen.contains("Symbols (1)"));
        assert!(screen.contains("alpha"));
        assert!(screen.contains("3 nodes"));
    }

    #[test]
    fn test_render_empty_context() {
        let mut app = App::new(CompileContext::new());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("(no tree)"));
        assert!(screen.contains("(empty)"));
    }

    #[test]
    fn test_key_handling() {
        let mut app = sample_app();

        app.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(app.focused_pane, FocusedPane::Symbols);

        app.handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(app.symbols_scroll, 1);
        assert_eq!(app.tree_scroll, 0);

        app.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(app.symbols_scroll, 0);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
