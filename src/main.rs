use log::{error, info};
use macroquad::prelude::*;
use fading_life::{
    Config, DisplayLayout, FpsMeter, GameState, StartupError,
    input::{self, Interaction},
    rendering::{self, GridStyle, MacroquadSurface},
};

fn window_conf() -> Conf {
    let (width, height) = DisplayLayout::new(&Config::default()).window_size();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

fn now_ms() -> u64 {
    (get_time() * 1000.0) as u64
}

async fn run(config: Config) -> Result<(), StartupError> {
    let layout = DisplayLayout::new(&config);
    let mut state = GameState::new(&config)?;
    info!(
        "grid {}x{} cells of {} px, {} boundary, {} alive",
        config.grid_width,
        config.grid_height,
        config.cell_size,
        state.boundary().name(),
        state.grid().population()
    );

    let mut interaction = Interaction::new(layout);
    let mut surface = MacroquadSurface::new(layout.scale);
    let mut fps = FpsMeter::new();

    // Window close goes through the input layer like any other quit
    prevent_quit();

    while !state.should_quit() {
        for event in input::poll_events() {
            interaction.handle(&mut state, event);
        }
        if state.should_quit() {
            break;
        }

        state.update(now_ms());

        let style = GridStyle {
            fade: state.fade().is_some(),
            show_mesh: state.show_mesh(),
            ..GridStyle::default()
        };
        rendering::draw_board(&mut surface, &layout, state.grid(), &style);
        let status = rendering::status_line(fps.fps(), state.clock(), state.grid().population());
        rendering::draw_status(&mut surface, &layout, &status);

        fps.record_frame(now_ms());
        next_frame().await;
    }

    info!("exiting after {} ticks", state.clock().ticks());
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if let Err(e) = run(Config::default()).await {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}
