//! Removal of extraction artifacts before tokenization.

use crate::locale::Locale;
use crate::model::Chunk;

/// Strips page footers and the trailing boilerplate line from a chunk stream.
pub struct Sanitizer<'a> {
    locale: &'a Locale,
}

impl<'a> Sanitizer<'a> {
    pub fn new(locale: &'a Locale) -> Self {
        Self { locale }
    }

    /// Remove every page-number pair, then the final chunk
    /// (`Contact <name> on LinkedIn`). Returns the number of pairs removed.
    pub fn sanitize(&self, chunks: &mut Vec<Chunk>) -> usize {
        let removed = self.remove_page_markers(chunks);
        if let Some(trailer) = self.remove_trailer(chunks) {
            log::debug!("Removed trailing chunk {:?}", trailer.text);
        }
        removed
    }

    /// Remove every `Page` chunk that is immediately followed by a chunk
    /// containing digits, together with that chunk. A `Page` chunk with no number after
    /// it stays. Running this twice changes nothing the second time.
    pub fn remove_page_markers(&self, chunks: &mut Vec<Chunk>) -> usize {
        let page_number = &self.locale.patterns().page_number;
        let mut kept = Vec::with_capacity(chunks.len());
        let mut removed = 0;

        {
            let mut iter = chunks.drain(..).peekable();
            while let Some(chunk) = iter.next() {
                if self.locale.is_page_label(&chunk.text) {
                    if let Some(number) = iter.next_if(|next| page_number.is_match(&next.text)) {
                        log::debug!("Removed page marker {} {}", chunk.text, number.text);
                        removed += 1;
                        continue;
                    }
                }
                kept.push(chunk);
            }
        }

        *chunks = kept;
        removed
    }

    /// Drop the final chunk.
    pub fn remove_trailer(&self, chunks: &mut Vec<Chunk>) -> Option<Chunk> {
        chunks.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    fn chunks(texts: &[&str]) -> Vec<Chunk> {
        texts.iter().map(|t| Chunk::new(*t)).collect()
    }

    #[test]
    fn test_sanitize_removes_markers_and_trailer() {
        let locale = Locale::english().unwrap();
        let mut input = chunks(&[
            "Jane Doe",
            "Engineer",
            "Page",
            "1",
            "Skills & Expertise",
            "Rust",
            "Page",
            "2",
            "Contact Jane Doe on LinkedIn",
        ]);
        let removed = Sanitizer::new(&locale).sanitize(&mut input);
        assert_eq!(removed, 2);
        assert_eq!(
            texts(&input),
            vec!["Jane Doe", "Engineer", "Skills & Expertise", "Rust"]
        );
    }

    #[test]
    fn test_adjacent_markers() {
        let locale = Locale::english().unwrap();
        let mut input = chunks(&["a", "Page", "1", "Page", "2", "b"]);
        assert_eq!(Sanitizer::new(&locale).remove_page_markers(&mut input), 2);
        assert_eq!(texts(&input), vec!["a", "b"]);
    }

    #[test]
    fn test_page_without_number_is_kept() {
        let locale = Locale::english().unwrap();
        let mut input = chunks(&["a", "Page", "one", "Page"]);
        assert_eq!(Sanitizer::new(&locale).remove_page_markers(&mut input), 0);
        assert_eq!(texts(&input), vec!["a", "Page", "one", "Page"]);
    }

    #[test]
    fn test_number_anywhere_in_text() {
        let locale = Locale::english().unwrap();
        let sanitizer = Sanitizer::new(&locale);

        let mut input = chunks(&["Page", "12 items"]);
        assert_eq!(sanitizer.remove_page_markers(&mut input), 1);
        assert!(input.is_empty());

        let mut input = chunks(&["a", "Page", "2 of 5", "b"]);
        assert_eq!(sanitizer.remove_page_markers(&mut input), 1);
        assert_eq!(texts(&input), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_page_markers_is_idempotent() {
        let locale = Locale::english().unwrap();
        let sanitizer = Sanitizer::new(&locale);
        let mut input = chunks(&["a", "Page", "Page", "3", "b", "Page", "4"]);
        sanitizer.remove_page_markers(&mut input);
        let once = input.clone();
        assert_eq!(sanitizer.remove_page_markers(&mut input), 0);
        assert_eq!(input, once);
        assert_eq!(texts(&input), vec!["a", "Page", "b"]);
    }

    #[test]
    fn test_localized_page_label() {
        let locale = Locale::bundled("pt").unwrap();
        let mut input = chunks(&["a", "Página", "1", "b"]);
        assert_eq!(Sanitizer::new(&locale).remove_page_markers(&mut input), 1);
        assert_eq!(texts(&input), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let locale = Locale::english().unwrap();
        let mut input = Vec::new();
        assert_eq!(Sanitizer::new(&locale).sanitize(&mut input), 0);
        assert!(input.is_empty());
    }
}
