use std::env;
use std::io::Write;
use std::net::IpAddr;

use clap::Parser;
use serial_test::serial;
use tempfile::NamedTempFile;

use super::{Cli, Commands, write_render_output};
use crate::config::HERO_SRC_ENV;
use crate::page::DEFAULT_HERO_SRC;
use crate::render::render_document;
use crate::server;

const PORT_ENV: &str = "LANDING_PORT";

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn clear_env() {
    unsafe {
        env::remove_var(HERO_SRC_ENV);
        env::remove_var(PORT_ENV);
    }
}

fn serve_args(cli: &Cli) -> (IpAddr, u16) {
    match &cli.command {
        Some(Commands::Serve { host, port }) => (*host, *port),
        _ => panic!("expected serve command"),
    }
}

#[test]
#[serial]
fn test_hero_flag_beats_env_and_file() {
    clear_env();
    let file = config_file("hero_src: /from-file.png\n");
    unsafe {
        env::set_var(HERO_SRC_ENV, "/from-env.png");
    }

    let cli = Cli::try_parse_from([
        "landing",
        "--config",
        file.path().to_str().unwrap(),
        "--hero-src",
        "/from-flag.png",
        "render",
    ])
    .unwrap();
    assert_eq!(cli.site_config().unwrap().hero_src, "/from-flag.png");

    clear_env();
}

#[test]
#[serial]
fn test_hero_env_beats_file() {
    clear_env();
    let file = config_file("hero_src: /from-file.png\n");
    unsafe {
        env::set_var(HERO_SRC_ENV, "/from-env.png");
    }

    let cli = Cli::try_parse_from(["landing", "render", "--config", file.path().to_str().unwrap()])
        .unwrap();
    assert_eq!(cli.site_config().unwrap().hero_src, "/from-env.png");

    clear_env();
}

#[test]
#[serial]
fn test_file_applies_without_overrides() {
    clear_env();
    let file = config_file("hero_src: /from-file.png\n");

    let cli = Cli::try_parse_from(["landing", "--config", file.path().to_str().unwrap(), "render"])
        .unwrap();
    assert_eq!(cli.site_config().unwrap().hero_src, "/from-file.png");
}

#[test]
#[serial]
fn test_no_config_uses_defaults() {
    clear_env();
    let cli = Cli::try_parse_from(["landing", "render"]).unwrap();
    assert_eq!(cli.site_config().unwrap().hero_src, DEFAULT_HERO_SRC);
}

#[test]
#[serial]
fn test_port_env_supplies_default() {
    clear_env();
    unsafe {
        env::set_var(PORT_ENV, "4000");
    }

    let cli = Cli::try_parse_from(["landing", "serve"]).unwrap();
    assert_eq!(serve_args(&cli).1, 4000);

    clear_env();
}

#[test]
#[serial]
fn test_port_flag_beats_env() {
    clear_env();
    unsafe {
        env::set_var(PORT_ENV, "4000");
    }

    let cli = Cli::try_parse_from(["landing", "serve", "--port", "5000"]).unwrap();
    assert_eq!(serve_args(&cli).1, 5000);

    clear_env();
}

#[test]
#[serial]
fn test_serve_defaults_come_from_server_config() {
    clear_env();
    let cli = Cli::try_parse_from(["landing", "serve"]).unwrap();
    let defaults = server::Config::default();
    assert_eq!(serve_args(&cli), (defaults.host, defaults.port));
    assert_eq!(defaults.host.to_string(), "0.0.0.0");
    assert_eq!(defaults.port, 3000);
}

#[test]
fn test_render_stdout_matches_file_bytes() {
    let html = render_document(&crate::page::PageView::default());
    let mut stdout = Vec::new();
    write_render_output(&mut stdout, &html, false).unwrap();
    assert_eq!(stdout, html.as_bytes());
}

#[test]
fn test_render_summary_gets_newline() {
    let mut stdout = Vec::new();
    write_render_output(&mut stdout, "Wrote 10 bytes to x.html", true).unwrap();
    assert_eq!(stdout, b"Wrote 10 bytes to x.html\n");
}
