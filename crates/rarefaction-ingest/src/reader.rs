//! Streaming reader pairing untranslated reads with their translations.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::record::{KrakenRead, TranslatedRecord, UntranslatedRecord};

/// Counters collected while pairing the two files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PairingStats {
    /// Untranslated lines read.
    pub reads: u64,
    /// Reads marked classified.
    pub classified: u64,
    /// Classified reads whose id differs from the paired translation.
    pub mismatched_ids: u64,
    /// Translated lines left over once the untranslated file ended.
    pub unused_translations: u64,
}

/// Checks that `path` names an existing regular file.
pub fn check_input(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Iterator over the reads of an untranslated Kraken file.
///
/// Each classified read consumes the next line of the translated file, so
/// the translated file must list classified reads in the same order.
pub struct KrakenReads<U, T> {
    untranslated: Lines<U>,
    translated: Lines<T>,
    untranslated_path: PathBuf,
    translated_path: PathBuf,
    untranslated_line: usize,
    translated_line: usize,
    stats: PairingStats,
    done: bool,
}

impl KrakenReads<BufReader<File>, BufReader<File>> {
    /// Opens both Kraken files for streaming.
    pub fn open(untranslated: &Path, translated: &Path) -> Result<Self> {
        check_input(untranslated)?;
        check_input(translated)?;
        let untranslated_file = open_file(untranslated)?;
        let translated_file = open_file(translated)?;
        debug!(
            untranslated = %untranslated.display(),
            translated = %translated.display(),
            "opened kraken inputs"
        );
        Ok(
            Self::new(BufReader::new(untranslated_file), BufReader::new(translated_file))
                .with_paths(untranslated, translated),
        )
    }
}

impl<U: BufRead, T: BufRead> KrakenReads<U, T> {
    pub fn new(untranslated: U, translated: T) -> Self {
        Self {
            untranslated: untranslated.lines(),
            translated: translated.lines(),
            untranslated_path: PathBuf::from("<untranslated>"),
            translated_path: PathBuf::from("<translated>"),
            untranslated_line: 0,
            translated_line: 0,
            stats: PairingStats::default(),
            done: false,
        }
    }

    /// Set the paths reported in errors and logs.
    #[must_use]
    pub fn with_paths(mut self, untranslated: &Path, translated: &Path) -> Self {
        self.untranslated_path = untranslated.to_path_buf();
        self.translated_path = translated.to_path_buf();
        self
    }

    pub fn stats(&self) -> PairingStats {
        self.stats
    }

    /// Drain the remaining reads and report leftover translations.
    pub fn finish(mut self) -> Result<PairingStats> {
        for read in self.by_ref() {
            read?;
        }
        for line in self.translated.by_ref() {
            self.translated_line += 1;
            let line = line.map_err(|source| IngestError::ReadLine {
                path: self.translated_path.clone(),
                line: self.translated_line,
                source,
            })?;
            if !line.trim().is_empty() {
                self.stats.unused_translations += 1;
            }
        }
        if self.stats.mismatched_ids > 0 {
            warn!(
                mismatched_ids = self.stats.mismatched_ids,
                "read ids differ between untranslated and translated files"
            );
        }
        if self.stats.unused_translations > 0 {
            warn!(
                unused_translations = self.stats.unused_translations,
                path = %self.translated_path.display(),
                "translated file has more entries than classified reads"
            );
        }
        Ok(self.stats)
    }

    fn next_translation(&mut self, record: UntranslatedRecord) -> Result<KrakenRead> {
        let Some(line) = self.translated.next() else {
            return Err(IngestError::TranslationExhausted {
                untranslated: self.untranslated_path.clone(),
                translated: self.translated_path.clone(),
                line: self.untranslated_line,
            });
        };
        self.translated_line += 1;
        let line = line.map_err(|source| IngestError::ReadLine {
            path: self.translated_path.clone(),
            line: self.translated_line,
            source,
        })?;
        let translated =
            TranslatedRecord::parse(&line).ok_or_else(|| IngestError::MalformedTranslation {
                path: self.translated_path.clone(),
                line: self.translated_line,
                content: line.clone(),
            })?;
        if let Some(read_id) = record.read_id.as_deref() {
            if read_id != translated.read_id {
                self.stats.mismatched_ids += 1;
                warn!(
                    line = self.untranslated_line,
                    untranslated_id = read_id,
                    translated_id = %translated.read_id,
                    "read id mismatch"
                );
            }
        }
        Ok(KrakenRead::Classified {
            read_id: translated.read_id,
            rankings: translated.rankings,
        })
    }
}

impl<U: BufRead, T: BufRead> Iterator for KrakenReads<U, T> {
    type Item = Result<KrakenRead>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let line = match self.untranslated.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(line) => line,
        };
        self.untranslated_line += 1;
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                self.done = true;
                return Some(Err(IngestError::ReadLine {
                    path: self.untranslated_path.clone(),
                    line: self.untranslated_line,
                    source,
                }));
            }
        };
        let record = UntranslatedRecord::parse(&line);
        self.stats.reads += 1;
        if !record.classified {
            return Some(Ok(KrakenRead::Unclassified));
        }
        self.stats.classified += 1;
        let read = self.next_translation(record);
        if read.is_err() {
            self.done = true;
        }
        Some(read)
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reads(untranslated: &str, translated: &str) -> KrakenReads<Cursor<String>, Cursor<String>> {
        KrakenReads::new(
            Cursor::new(untranslated.to_string()),
            Cursor::new(translated.to_string()),
        )
    }

    #[test]
    fn pairs_classified_reads_in_order() {
        let mut stream = reads(
            "C\tr1\t2\t100\t2:70\nU\tr2\t0\t100\t0:70\nC\tr3\t562\t100\t562:70\n",
            "r1\td__Bacteria\nr3\td__Bacteria|s__Escherichia_coli\n",
        );
        let collected: Vec<KrakenRead> = stream.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(collected.len(), 3);
        assert!(collected[0].is_classified());
        assert_eq!(collected[1], KrakenRead::Unclassified);
        assert_eq!(collected[2].rankings().len(), 2);
        assert_eq!(
            stream.stats(),
            PairingStats {
                reads: 3,
                classified: 2,
                mismatched_ids: 0,
                unused_translations: 0,
            }
        );
    }

    #[test]
    fn blank_untranslated_lines_are_unclassified_reads() {
        let mut stream = reads("\nU\tr1\t0\t10\t0:1\n  \n", "");
        let collected: Vec<KrakenRead> = stream.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(collected, vec![KrakenRead::Unclassified; 3]);
        let stats = stream.finish().unwrap();
        assert_eq!(stats.reads, 3);
        assert_eq!(stats.classified, 0);
    }

    #[test]
    fn exhausted_translation_is_an_error() {
        let mut stream = reads("C\tr1\t2\t10\t2:1\nC\tr2\t2\t10\t2:1\n", "r1\td__Bacteria\n");
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            IngestError::TranslationExhausted { line: 2, .. }
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn malformed_translation_is_an_error() {
        let mut stream = reads("C\tr1\t2\t10\t2:1\n", "r1\n");
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            IngestError::MalformedTranslation { line: 1, .. }
        ));
    }

    #[test]
    fn mismatched_ids_are_counted_not_rejected() {
        let stream = reads("C\tr1\t2\t10\t2:1\n", "other\td__Bacteria\nextra\td__Archaea\n");
        let stats = stream.finish().unwrap();
        assert_eq!(stats.mismatched_ids, 1);
        assert_eq!(stats.unused_translations, 1);
    }

    #[test]
    fn missing_input_is_reported() {
        let err = check_input(Path::new("/definitely/not/here.kraken")).unwrap_err();
        assert!(matches!(err, IngestError::InputNotFound { .. }));
    }
}
