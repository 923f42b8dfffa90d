use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const MIMETYPE: &str = "application/epub+zip";

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;

const STYLESHEET: &str = "body { font-family: Arial, sans-serif; }\n";

/// Write a single-chapter EPUB container to `path`, overwriting any
/// existing file there.
///
/// The container holds the declared title and author, one chapter whose
/// body is `<h1>title</h1><p>body</p>`, an EPUB 3 navigation document,
/// an EPUB 2 NCX for older readers, and one default stylesheet. Title,
/// author, and body are XML-escaped before interpolation.
pub fn write_epub(title: &str, author: &str, body: &str, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create EPUB: {}", path.display()))?;
    let mut zip = ZipWriter::new(file);

    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // The mimetype entry must come first and must not be compressed.
    zip.start_file("mimetype", stored)?;
    zip.write_all(MIMETYPE.as_bytes())?;

    zip.start_file("META-INF/container.xml", deflated)?;
    zip.write_all(CONTAINER_XML.as_bytes())?;

    let identifier = identifier_for(title);

    zip.start_file("OEBPS/content.opf", deflated)?;
    zip.write_all(package_document(title, author, &identifier).as_bytes())?;

    zip.start_file("OEBPS/nav.xhtml", deflated)?;
    zip.write_all(nav_document(title).as_bytes())?;

    zip.start_file("OEBPS/toc.ncx", deflated)?;
    zip.write_all(ncx_document(title, &identifier).as_bytes())?;

    zip.start_file("OEBPS/chap_01.xhtml", deflated)?;
    zip.write_all(chapter_document(title, body).as_bytes())?;

    zip.start_file("OEBPS/style/nav.css", deflated)?;
    zip.write_all(STYLESHEET.as_bytes())?;

    zip.finish()?;

    debug!("wrote EPUB container to {}", path.display());
    Ok(())
}

/// Escape the five XML-significant characters.
fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn identifier_for(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("urn:doc2epub:{}", slug.trim_matches('-'))
}

fn package_document(title: &str, author: &str, identifier: &str) -> String {
    let modified = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="book-id">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:identifier id="book-id">{identifier}</dc:identifier>
    <dc:title>{title}</dc:title>
    <dc:creator>{author}</dc:creator>
    <dc:language>en</dc:language>
    <meta property="dcterms:modified">{modified}</meta>
  </metadata>
  <manifest>
    <item id="nav" href="nav.xhtml" media-type="application/xhtml+xml" properties="nav"/>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="chap1" href="chap_01.xhtml" media-type="application/xhtml+xml"/>
    <item id="style-nav" href="style/nav.css" media-type="text/css"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="nav"/>
    <itemref idref="chap1"/>
  </spine>
</package>
"#,
        identifier = xml_escape(identifier),
        title = xml_escape(title),
        author = xml_escape(author),
        modified = modified,
    )
}

fn nav_document(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops">
<head>
  <title>{title}</title>
</head>
<body>
  <nav epub:type="toc" id="toc">
    <h2>Contents</h2>
    <ol>
      <li><a href="chap_01.xhtml">Chapter 1</a></li>
    </ol>
  </nav>
</body>
</html>
"#,
        title = xml_escape(title),
    )
}

fn ncx_document(title: &str, identifier: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="{identifier}"/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle><text>{title}</text></docTitle>
  <navMap>
    <navPoint id="chap1" playOrder="1">
      <navLabel><text>Chapter 1</text></navLabel>
      <content src="chap_01.xhtml"/>
    </navPoint>
  </navMap>
</ncx>
"#,
        identifier = xml_escape(identifier),
        title = xml_escape(title),
    )
}

fn chapter_document(title: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="en" xml:lang="en">
<head>
  <title>{title}</title>
  <link rel="stylesheet" type="text/css" href="style/nav.css"/>
</head>
<body>
<h1>{title}</h1><p>{body}</p>
</body>
</html>
"#,
        title = xml_escape(title),
        body = xml_escape(body),
    )
}
