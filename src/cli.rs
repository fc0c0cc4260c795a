use std::{
    fmt::Write as _,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use afetmap_boundary::LocationRecord;
use afetmap_core::{
    coords::format_dms,
    labels::{Labels, Language},
    links,
    panel::Panel,
};
use afetmap_entities::{geo::MapPoint, location::Location};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language of the labels: tr or en
    #[arg(long, value_parser = parse_language)]
    pub language: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the coordinates and Google Maps links of a point
    Links {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Print the drawer contents of a location record (JSON)
    Show {
        /// Path of the record or '-' for stdin
        record: PathBuf,
    },
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|err| format!("{err}"))
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config,
        language,
        command,
    } = args;
    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(language) = language {
        cfg.drawer.language = language;
    }
    let labels = Labels::for_language(cfg.drawer.language);
    match command {
        Command::Links { lat, lng } => {
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
            print!("{}", render_links(pos, labels));
        }
        Command::Show { record } => {
            let location = read_location(&record)?;
            // The layout is irrelevant for plain text output.
            let panel = Panel::build(Some(&location), 0.0, &cfg.drawer)
                .context("Nothing to render")?;
            print!("{}", render_panel(&panel, &location));
        }
    }
    Ok(())
}

fn read_location(path: &Path) -> Result<Location> {
    let json = if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Unable to read record from stdin")?;
        json
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Unable to read record from {}", path.display()))?
    };
    let record: LocationRecord = serde_json::from_str(&json).context("Invalid location record")?;
    let location = Location::try_from(record).context("Invalid location record")?;
    log::debug!("Loaded location at {}", location.pos);
    Ok(location)
}

fn render_links(pos: MapPoint, labels: &Labels) -> String {
    let mut out = String::new();
    _ = writeln!(out, "{}", format_dms(pos));
    _ = writeln!(out, "{}: {}", labels.open_in_maps, links::view_url(pos));
    _ = writeln!(out, "{}: {}", labels.get_directions, links::directions_url(pos));
    out
}

fn render_panel(panel: &Panel, location: &Location) -> String {
    let Panel {
        address,
        coordinates,
        maps_buttons,
        source_url,
        embed_url,
        saved_text,
        needs,
        labels,
        ..
    } = panel;
    let mut out = String::new();
    _ = writeln!(out, "{address}");
    _ = writeln!(out, "{coordinates}");
    _ = writeln!(out);
    for button in maps_buttons {
        _ = writeln!(out, "{}: {}", button.label, button.link.url(location));
    }
    _ = writeln!(out, "{}: {source_url}", labels.source);
    _ = writeln!(out);
    let needs: Vec<_> = needs.iter().map(|(_, label)| *label).collect();
    _ = writeln!(out, "{}: {}", labels.needs, needs.join(", "));
    _ = writeln!(out);
    _ = writeln!(out, "{}", labels.help_content);
    if saved_text.is_empty() {
        _ = writeln!(out, "{embed_url}");
    } else {
        _ = writeln!(out, "{saved_text}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use afetmap_core::DrawerConfig;
    use afetmap_entities::builders::*;

    #[test]
    fn parse_links_command() {
        let args = Args::try_parse_from([
            "afetmap", "--language", "en", "links", "--lat", "-33.8675", "--lng", "151.207",
        ])
        .unwrap();
        assert_eq!(args.language, Some(Language::English));
        assert!(matches!(
            args.command,
            Command::Links { lat, lng } if lat == -33.8675 && lng == 151.207
        ));
    }

    #[test]
    fn reject_unknown_language() {
        assert!(Args::try_parse_from(["afetmap", "--language", "xx", "show", "-"]).is_err());
    }

    #[test]
    fn render_links_of_point() {
        let pos = MapPoint::from_lat_lng_deg(36.2021, 36.1604);
        let out = render_links(pos, Labels::for_language(Language::Turkish));
        assert_eq!(
            out,
            "36° 12′ 7.560″ N 36° 9′ 37.440″ E\n\
             Google Haritalarda Aç: https://www.google.com/maps/@36.2021,36.1604,22z\n\
             Yol Tarifi Al: https://www.google.com/maps?saddr=My+Location&daddr=36.2021,36.1604\n"
        );
    }

    #[test]
    fn render_panel_with_saved_text() {
        let location = Location::build()
            .pos(MapPoint::from_lat_lng_deg(36.2021, 36.1604))
            .address("Antakya, Hatay")
            .post_id("5")
            .author("hatay")
            .full_text(Some("Su lazım"))
            .finish();
        let config = DrawerConfig {
            language: Language::English,
            ..Default::default()
        };
        let panel = Panel::build(Some(&location), 1024.0, &config).unwrap();
        let out = render_panel(&panel, &location);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Antakya, Hatay");
        assert_eq!(lines[1], "36° 12′ 7.560″ N 36° 9′ 37.440″ E");
        assert_eq!(
            lines[3],
            "Open in Google Maps: https://www.google.com/maps/@36.2021,36.1604,22z"
        );
        assert_eq!(
            lines[4],
            "Get directions: https://www.google.com/maps?saddr=My+Location&daddr=36.2021,36.1604"
        );
        assert_eq!(lines[5], "Source: https://twitter.com/anyuser/status/5");
        assert_eq!(lines[7], "Needs: Water, Supplies, Blankets, Team");
        assert_eq!(lines[9], "Help request");
        assert_eq!(lines[10], "Su lazım");
    }

    #[test]
    fn render_panel_without_saved_text_shows_embed_url() {
        let location = Location::build().post_id("5").author("hatay").finish();
        let panel = Panel::build(Some(&location), 1024.0, &DrawerConfig::default()).unwrap();
        let out = render_panel(&panel, &location);
        assert!(out.ends_with(
            "Yardım İçeriği\nhttps://twitframe.com/show?url=https://twitter.com/hatay/status/5&conversation=none\n"
        ));
    }
}
