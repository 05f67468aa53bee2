//! Rendering a [`Route`] / [`Routes`] for the CLI (spec §6).
//!
//! JSON numeric fields are six-decimal fixed, which `serde_json`'s own
//! float formatter does not produce (it writes the shortest round-tripping
//! representation) — so JSON here is hand-assembled rather than derived via
//! `Serialize`, the way `original_source/cgr`'s API collaborator hand-rolls
//! its own `printf`-formatted output rather than reaching for a JSON
//! library it doesn't otherwise need.

use crate::query::{Route, Routes};
use crate::types::Seconds;

/// `json` or `text`, selected by the CLI's `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

fn fixed6(value: Seconds) -> String {
    format!("{value:.6}")
}

fn contacts_json(contacts: &[i64]) -> String {
    let ids: Vec<String> = contacts.iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(","))
}

fn single_route_fields(route: &Route, t0: Seconds) -> String {
    if !route.found {
        return r#""found":false"#.to_string();
    }
    let eta = route.eta.unwrap();
    format!(
        r#""found":true,"eta":{},"latency":{},"hops":{},"contacts":{}"#,
        fixed6(eta),
        fixed6(eta - t0),
        route.hops(),
        contacts_json(&route.contacts),
    )
}

/// `route` rendered compactly as `{...}`, with each field indented one
/// level deeper than `depth`.
fn render_route_block(route: &Route, t0: Seconds, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let inner_pad = "  ".repeat(depth + 1);
    if !route.found {
        return format!("{pad}{{\n{inner_pad}\"found\": false\n{pad}}}");
    }
    let eta = route.eta.unwrap();
    format!(
        "{pad}{{\n{inner_pad}\"found\": true,\n{inner_pad}\"eta\": {},\n{inner_pad}\"latency\": {},\n{inner_pad}\"hops\": {},\n{inner_pad}\"contacts\": {}\n{pad}}}",
        fixed6(eta),
        fixed6(eta - t0),
        route.hops(),
        contacts_json(&route.contacts),
    )
}

fn push_indented(out: &mut String, pretty: bool, depth: usize, s: &str) {
    if pretty {
        out.push('\n');
        out.push_str(&"  ".repeat(depth));
    }
    out.push_str(s);
}

/// Renders a single route as JSON (spec §6): `{"found":true,"eta":F,...}`
/// or `{"found":false}`.
pub fn render_json_single(route: &Route, t0: Seconds, pretty: bool) -> String {
    if pretty {
        let mut out = String::from("{");
        if route.found {
            let eta = route.eta.unwrap();
            push_indented(&mut out, true, 1, &format!(r#""found": true,"#));
            push_indented(&mut out, true, 1, &format!(r#""eta": {},"#, fixed6(eta)));
            push_indented(&mut out, true, 1, &format!(r#""latency": {},"#, fixed6(eta - t0)));
            push_indented(&mut out, true, 1, &format!(r#""hops": {},"#, route.hops()));
            push_indented(&mut out, true, 1, &format!(r#""contacts": {}"#, contacts_json(&route.contacts)));
        } else {
            push_indented(&mut out, true, 1, r#""found": false"#);
        }
        out.push('\n');
        out.push('}');
        out
    } else {
        format!("{{{}}}", single_route_fields(route, t0))
    }
}

/// Renders up to K routes as JSON (spec §6): `{"found":true,"routes":[...]}`
/// or `{"found":false,"routes":[]}`.
pub fn render_json_multi(routes: &Routes, t0: Seconds, pretty: bool) -> String {
    if pretty {
        let found = !routes.is_empty();
        let blocks: Vec<String> = routes
            .routes
            .iter()
            .map(|r| render_route_block(r, t0, 2))
            .collect();
        let mut out = String::from("{\n");
        out.push_str(&format!("  \"found\": {found},\n"));
        if blocks.is_empty() {
            out.push_str("  \"routes\": []\n");
        } else {
            out.push_str("  \"routes\": [\n");
            out.push_str(&blocks.join(",\n"));
            out.push_str("\n  ]\n");
        }
        out.push('}');
        out
    } else {
        let parts: Vec<String> = routes
            .routes
            .iter()
            .map(|r| format!("{{{}}}", single_route_fields(r, t0)))
            .collect();
        format!(
            r#"{{"found":{},"routes":[{}]}}"#,
            !routes.is_empty(),
            parts.join(",")
        )
    }
}

/// Renders a single route as human-readable text.
pub fn render_text_single(route: &Route, t0: Seconds) -> String {
    if !route.found {
        return "no route found\n".to_string();
    }
    let eta = route.eta.unwrap();
    format!(
        "ETA:     {:.6} s\nLatency: {:.6} s\nHops:    {}\nPath:    {}\n",
        eta,
        eta - t0,
        route.hops(),
        path_arrows(&route.contacts),
    )
}

fn path_arrows(contacts: &[i64]) -> String {
    contacts
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Renders up to K routes as human-readable text: a header block (ETA
/// min/max/avg, diversity, hop range) followed by one line per route with
/// ETA, latency, hops, overhead-vs-optimal percent, and the path (spec §6).
pub fn render_text_multi(routes: &Routes, t0: Seconds) -> String {
    if routes.is_empty() {
        return "no route found\n".to_string();
    }

    let etas: Vec<Seconds> = routes.routes.iter().filter_map(|r| r.eta).collect();
    let best_eta = etas.iter().copied().fold(f64::INFINITY, f64::min);
    let worst_eta = etas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg_eta = etas.iter().sum::<f64>() / etas.len() as f64;
    let hops: Vec<usize> = routes.routes.iter().map(|r| r.hops()).collect();
    let min_hops = hops.iter().copied().min().unwrap_or(0);
    let max_hops = hops.iter().copied().max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "Routes: {}  ETA[min={:.6} max={:.6} avg={:.6}]  diversity={:.6}  hops[{}..{}]\n",
        routes.len(),
        best_eta,
        worst_eta,
        avg_eta,
        worst_eta - best_eta,
        min_hops,
        max_hops,
    ));

    for (i, r) in routes.routes.iter().enumerate() {
        let eta = r.eta.unwrap_or(f64::NAN);
        let overhead_pct = if best_eta > 0.0 {
            ((eta - best_eta) / best_eta) * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "  #{} ETA={:.6}s latency={:.6}s hops={} overhead={:.6}% path={}\n",
            i + 1,
            eta,
            eta - t0,
            r.hops(),
            overhead_pct,
            path_arrows(&r.contacts),
        ));
    }
    out
}
