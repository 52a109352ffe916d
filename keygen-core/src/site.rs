//! Site metadata derived from the catalog.
//!
//! - URL slugs from titles
//! - Page titles and meta descriptions
//! - Sitemap entries and their XML rendering

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog::Catalog;

/// Static pages listed ahead of the generators in the sitemap.
const STATIC_PAGES: [(&str, ChangeFrequency, f32); 3] = [
	("", ChangeFrequency::Weekly, 1.0),
	("/privacy-policy", ChangeFrequency::Yearly, 0.3),
	("/terms-of-service", ChangeFrequency::Yearly, 0.3),
];

const GENERATOR_PRIORITY: f32 = 0.8;

/// Converts a display title into a URL-friendly slug.
///
/// - Characters outside `[a-z0-9]`, whitespace and `-` are dropped
/// - Whitespace and hyphen runs become a single `-`
/// - Leading or trailing whitespace therefore leaves an edge hyphen
///
/// Example:
/// `"Secure & Strong Secret Key Generator"` → `"secure-strong-secret-key-generator"`
pub fn title_to_slug(title: &str) -> String {
	let lowered = title.to_lowercase();
	let kept = lowered
		.chars()
		.filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-');

	let mut slug = String::with_capacity(lowered.len());
	for c in kept {
		let c = if c.is_whitespace() { '-' } else { c };
		if c == '-' && slug.ends_with('-') {
			continue;
		}
		slug.push(c);
	}
	slug
}

/// Page title for a generator.
pub fn page_title(generator_title: &str) -> String {
	format!("{generator_title} - Key Generator")
}

/// Meta description for a generator.
pub fn meta_description(generator_title: &str, description: &str) -> String {
	format!(
		"Generate secure {} instantly. {description} Free, secure, and browser-based key generator tool.",
		generator_title.to_lowercase()
	)
}

/// Sitemap change frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
	Weekly,
	Monthly,
	Yearly,
}

impl ChangeFrequency {
	pub fn as_str(self) -> &'static str {
		match self {
			ChangeFrequency::Weekly => "weekly",
			ChangeFrequency::Monthly => "monthly",
			ChangeFrequency::Yearly => "yearly",
		}
	}
}

/// One `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
	pub url: String,
	pub change_frequency: ChangeFrequency,
	pub priority: f32,
}

impl SitemapEntry {
	/// Renders the entry as a `<url>` element.
	pub fn to_xml(&self) -> String {
		format!(
			"<url><loc>{}</loc><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
			escape_xml(&self.url),
			self.change_frequency.as_str(),
			self.priority
		)
	}
}

/// Builds the sitemap: static pages first, then every generator in catalog order.
///
/// A trailing `/` on `base_url` is ignored.
pub fn sitemap(base_url: &str, catalog: &Catalog) -> Vec<SitemapEntry> {
	let base = base_url.trim_end_matches('/');

	let static_pages = STATIC_PAGES.iter().map(|(path, change_frequency, priority)| SitemapEntry {
		url: format!("{base}{path}"),
		change_frequency: *change_frequency,
		priority: *priority,
	});

	let generator_pages = catalog.list().iter().map(|generator| SitemapEntry {
		url: format!("{base}{}", generator.path()),
		change_frequency: ChangeFrequency::Monthly,
		priority: GENERATOR_PRIORITY,
	});

	static_pages.chain(generator_pages).collect()
}

/// Renders entries as a sitemaps.org `urlset` document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
	let mut xml = String::from(
		"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
	);
	for entry in entries {
		// Writing to a String cannot fail
		let _ = writeln!(xml, "  {}", entry.to_xml());
	}
	xml.push_str("</urlset>\n");
	xml
}

fn escape_xml(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&apos;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
