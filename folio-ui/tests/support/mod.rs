use dioxus::prelude::*;
use folio_ui::PostSummary;

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio_ui=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn post(title: &str, date: &str, intro: &str) -> PostSummary {
    PostSummary::new(title, date, intro).expect("test post has a title")
}

pub fn render_card(post: PostSummary) -> String {
    dioxus_ssr::render_element(rsx! {
        folio_ui::ListItemCard { post }
    })
}

pub fn render_list(posts: Vec<PostSummary>) -> String {
    dioxus_ssr::render_element(rsx! {
        folio_ui::PostListView { posts }
    })
}

/// Text content of the first element carrying `data-testid="{testid}"`
pub fn text_of(html: &str, testid: &str) -> Option<String> {
    let marker = format!("data-testid=\"{}\"", testid);
    let start = html.find(&marker)? + marker.len();
    let rest = &html[start..];
    let open_end = rest.find('>')? + 1;
    let rest = &rest[open_end..];
    let close = rest.find('<')?;
    Some(rest[..close].to_string())
}

pub fn count_of(html: &str, testid: &str) -> usize {
    html.matches(&format!("data-testid=\"{}\"", testid)).count()
}

/// Decode the named and numeric character references the renderer emits
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail.find(';').and_then(|semi| {
            let entity = &tail[1..semi];
            let ch = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            ch.map(|ch| (ch, semi + 1))
        });
        match decoded {
            Some((ch, len)) => {
                out.push(ch);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
