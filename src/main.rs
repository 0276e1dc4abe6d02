use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use monster_widget::config::AppConfig;
use monster_widget::core::{
    template, HostContext, HtmlRenderer, MonsterWidget, RenderContext, Sidebar, SidebarRegistry,
    WidgetRegistry,
};
use monster_widget::widgets;
use std::path::PathBuf;

/// Monster Widget - render a whole stack of community widgets at once
#[derive(Parser, Debug, Clone)]
#[command(name = "monster-widget")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to load instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Activate every optional component
    #[arg(long = "all")]
    all: bool,

    /// Activate the blogs component
    #[arg(long = "blogs")]
    blogs: bool,

    /// Activate the friends component
    #[arg(long = "friends")]
    friends: bool,

    /// Activate the groups component
    #[arg(long = "groups")]
    groups: bool,

    /// Activate the messages component
    #[arg(long = "messages")]
    messages: bool,

    /// Run the host in multi-site mode
    #[arg(long = "multisite")]
    multisite: bool,

    /// Render the sidebar this many times (placeholder ids keep
    /// counting across renders)
    #[arg(short = 'r', long = "repeat", value_name = "N", default_value = "1")]
    repeat: u32,

    /// List registered widget ids and exit
    #[arg(short = 'l', long = "list")]
    list_widgets: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    // CLI flags activate components on top of whatever the config says
    if cli.all {
        config.features = monster_widget::Features::all();
    }
    config.features.blogs |= cli.blogs;
    config.features.friends |= cli.friends;
    config.features.groups |= cli.groups;
    config.features.messages |= cli.messages;
    config.features.multisite |= cli.multisite;

    // Assemble the demo host
    let mut registry = WidgetRegistry::new();
    widgets::register_all(&mut registry);

    if cli.list_widgets {
        let mut ids = registry.list();
        ids.sort();
        for id in ids {
            println!("{}", id);
        }
        return Ok(());
    }

    if !template::has_placeholders(&config.sidebar.before_widget) {
        warn!(
            "Sidebar '{}' template has no {{id}}/{{class}} placeholders; \
             every widget wrapper will be identical",
            config.sidebar.id
        );
    }

    let mut sidebars = SidebarRegistry::new();
    sidebars.register(
        &config.sidebar.id,
        Sidebar {
            name: config.sidebar.name.clone(),
            before_widget: config.sidebar.before_widget.clone(),
            after_widget: config.sidebar.after_widget.clone(),
        },
    );

    let monster = MonsterWidget::new();
    let host = HostContext {
        widgets: &registry,
        sidebars: &sidebars,
        features: &config.features,
    };
    let ctx = RenderContext {
        sidebar_id: config.sidebar.id.clone(),
    };

    info!(
        "Rendering {} widget(s) into '{}'",
        monster.widget_config(&config.features).len(),
        config.sidebar.id
    );

    let mut renderer = HtmlRenderer::new(&registry, config.sidebar.after_widget.clone());
    for _ in 0..cli.repeat {
        monster.render(&ctx, &host, &mut renderer)?;
    }

    print!("{}", renderer.into_html());
    Ok(())
}
