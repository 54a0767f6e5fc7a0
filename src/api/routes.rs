use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Json, Router};

use crate::pipeline::Pipeline;
use crate::ranker::rank;
use crate::roster;
use crate::types::PlayerRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pipeline: Arc<Pipeline>,
    pub roster_path: PathBuf,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(ratings_page))
        .route("/api/ratings", get(ratings_json))
        .route("/health", get(health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn ratings_page(State(state): State<ApiState>) -> Html<String> {
    let players = resolve_ranked(&state).await;
    Html(render_page(&players))
}

async fn ratings_json(State(state): State<ApiState>) -> Json<Vec<PlayerRecord>> {
    Json(resolve_ranked(&state).await)
}

async fn health() -> &'static str {
    "ok"
}

async fn resolve_ranked(state: &ApiState) -> Vec<PlayerRecord> {
    let fide_ids = roster::load(&state.roster_path);
    let snapshot = state.pipeline.resolve(&fide_ids).await;
    rank(snapshot.players)
}

// ---------------------------------------------------------------------------
// Page rendering
// ---------------------------------------------------------------------------

fn render_page(players: &[PlayerRecord]) -> String {
    let table = if players.is_empty() {
        "<p>No player data available.</p>".to_string()
    } else {
        render_table(players)
    };
    format!(
        "<html>\n<head>\n<title>FIDE Ratings</title>\n<style>\n\
         body {{ font-family: Arial, sans-serif; }}\n\
         table {{ border-collapse: collapse; width: 100%; }}\n\
         th, td {{ border: 1px solid #dddddd; text-align: left; padding: 8px; }}\n\
         th {{ background-color: #f2f2f2; }}\n\
         </style>\n</head>\n<body>\n<h1>FIDE Ratings</h1>\n{table}\n</body>\n</html>"
    )
}

fn render_table(players: &[PlayerRecord]) -> String {
    let mut html = String::from(
        "<table>\n<tr><th>Player</th><th>FIDE ID</th>\
         <th>Standard</th><th>Rapid</th><th>Blitz</th></tr>\n",
    );
    for p in players {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&p.name),
            escape_html(&p.fide_id),
            p.standard,
            p.rapid,
            p.blitz,
        ));
    }
    html.push_str("</table>");
    html
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn player(name: &str, standard: Rating) -> PlayerRecord {
        PlayerRecord {
            fide_id: "1".to_string(),
            name: name.to_string(),
            standard,
            rapid: Rating::Rated(2000),
            blitz: Rating::Unrated,
        }
    }

    #[test]
    fn table_shows_unrated_as_text() {
        let html = render_table(&[player("Jane Doe", Rating::Unrated)]);
        assert!(html.contains("<td>Jane Doe</td>"));
        assert!(html.contains("<td>Unrated</td>"));
        assert!(html.contains("<td>2000</td>"));
    }

    #[test]
    fn table_escapes_markup_in_names() {
        let html = render_table(&[player("<script>alert(1)</script>", Rating::Rated(2500))]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_batch_renders_notice() {
        let html = render_page(&[]);
        assert!(html.contains("No player data available."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn page_wraps_table_with_heading() {
        let html = render_page(&[player("Jane Doe", Rating::Rated(2500))]);
        assert!(html.contains("<h1>FIDE Ratings</h1>"));
        assert!(html.contains("<table>"));
    }
}
