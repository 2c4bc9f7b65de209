use chrono::SecondsFormat;
use quick_xml::escape::escape;

use super::entities::SitemapEntry;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">"));

    for entry in entries {
        xml.push_str("<url>");
        xml.push_str(&format!("<loc>{}</loc>", escape(entry.loc.as_str())));
        xml.push_str(&format!(
            "<lastmod>{}</lastmod>",
            entry.lastmod.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
        xml.push_str(&format!(
            "<changefreq>{}</changefreq>",
            entry.changefreq.as_str()
        ));
        xml.push_str(&format!("<priority>{:.1}</priority>", entry.priority));
        xml.push_str("</url>");
    }

    xml.push_str("</urlset>");
    xml
}
