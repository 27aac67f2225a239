// syntree: build a sample program tree, print it, and optionally inspect it

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use syntree::config::Config;
use syntree::context::CompileContext;
use syntree::tree::{
    NodeKind, create_binary_op_node, create_declaration_node, create_if_node, create_int_node,
    create_node,
};
use syntree::ui::App;

/// Stand-in for the parser: `int x = 2 + 3;` followed by `if ( x ) :`
fn build_sample(ctx: &mut CompileContext) {
    let declaration = create_declaration_node(
        create_node(NodeKind::Type, Some("int")),
        create_node(NodeKind::Identifier, Some("x")),
        create_binary_op_node("+", create_int_node(2), create_int_node(3)),
    );
    ctx.symbols_mut().insert("x", "int", 5, 1);

    let if_header = create_if_node(create_node(NodeKind::Identifier, Some("x")), None);

    ctx.set_root(create_node(NodeKind::Program, Some("program")));
    ctx.attach_to_root(declaration);
    ctx.attach_to_root(if_header);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            let program_name = std::env::args().next().unwrap_or_else(|| "syntree".to_string());
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!(
                "Usage: {} [output-file] [--tui] [--unbounded | --max-children <n>]",
                program_name
            );
            std::process::exit(1);
        }
    };

    let mut ctx = CompileContext::with_config(&config);
    build_sample(&mut ctx);

    let mut stdout = io::stdout();
    ctx.print_tree(&mut stdout)?;
    ctx.symbols().print(&mut stdout)?;

    if let Err(e) = ctx.write_tree(&config.output_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    eprintln!("Syntax tree written to {}", config.output_path.display());

    if !config.interactive {
        let released = ctx.teardown();
        info!(
            "released {} nodes and {} symbols",
            released.nodes, released.symbols
        );
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ctx);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
