use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor},
    mem::take,
    path::Path,
};

use log::{debug, trace, warn};
use smol_str::SmolStr;

use crate::{
    error::PlaylistError,
    format::{DiscontinuityItem, Item, Playlist, SegmentItem, UnknownItem, VariantItem, directives},
    registry::{Directive, HeaderField, lookup},
};

/// Reads a whole playlist.
pub fn read(reader: impl BufRead) -> Result<Playlist, PlaylistError> {
    let mut parser = ParserImpl::new(reader);
    parser.parse()?;
    Ok(parser.get_result())
}

pub fn read_str(text: &str) -> Result<Playlist, PlaylistError> {
    read(Cursor::new(text))
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Playlist, PlaylistError> {
    read(BufReader::new(File::open(path)?))
}

pub struct Parser(Box<dyn ParserImplTrait>);

impl Parser {
    pub fn new<T: BufRead + 'static>(reader: T) -> Self {
        Self(Box::new(ParserImpl::new(reader)))
    }

    pub fn parse(&mut self) -> Result<(), PlaylistError> {
        self.0.parse()
    }

    /// Takes the playlist out of the parser. Only complete after a
    /// successful [`Parser::parse`].
    pub fn get_result(&mut self) -> Playlist {
        self.0.get_result()
    }
}

trait ParserImplTrait {
    fn parse(&mut self) -> Result<(), PlaylistError>;
    fn get_result(&mut self) -> Playlist;
}

/// An item waiting for its URI line, with the lines read for it so far.
#[derive(Debug)]
struct Pending {
    item: PendingItem,
    lines: Vec<SmolStr>,
}

#[derive(Debug)]
enum PendingItem {
    /// Master mode: the next line is a variant URI
    Variant(VariantItem),
    /// Media mode: the next line is a segment URI
    Segment(SegmentItem),
}

impl Pending {
    fn new(item: PendingItem, line: &str) -> Self {
        Self {
            item,
            lines: vec![line.into()],
        }
    }

    fn complete(self, uri: &str) -> Item {
        match self.item {
            PendingItem::Variant(mut variant) => {
                variant.stream.uri = Some(uri.into());
                variant.into()
            }
            PendingItem::Segment(mut segment) => {
                segment.segment = uri.into();
                segment.into()
            }
        }
    }

    /// Gives up on the item, its lines are kept as they were.
    fn abandon(self, playlist: &mut Playlist) {
        warn!(
            "No URI line after {}, keeping {} line(s) as unknown items",
            self.lines[0],
            self.lines.len()
        );
        for line in self.lines {
            playlist.append_item(UnknownItem::new(line));
        }
    }
}

#[derive(Debug)]
enum ScanState {
    /// Nothing but `#EXTM3U` is accepted
    HeaderExpected,
    /// `pending` is set while a continuation line is open
    HeaderSeen { pending: Option<Pending> },
}

/// Consumes one trimmed, non-blank line.
fn step(state: ScanState, line: &str, playlist: &mut Playlist) -> Result<ScanState, PlaylistError> {
    let pending = match state {
        ScanState::HeaderExpected if line == directives::EXTM3U => {
            return Ok(ScanState::HeaderSeen { pending: None });
        }
        ScanState::HeaderExpected => return Err(PlaylistError::NotAPlaylist),
        ScanState::HeaderSeen { .. } if line == directives::EXTM3U => {
            return Err(PlaylistError::DuplicateHeader);
        }
        ScanState::HeaderSeen { pending } => pending,
    };

    let Some(entry) = lookup(line) else {
        return Ok(ScanState::HeaderSeen {
            pending: continue_line(pending, line, playlist),
        });
    };

    trace!("Dispatching {} to {}", line, entry.tag);
    let pending = match (entry.read_line)(line) {
        Ok(directive) => apply(directive, pending, line, playlist),
        Err(e) => {
            debug!("Keeping {} as an unknown item: {}", line, e);
            playlist.append_item(UnknownItem::with_cause(line, e));
            pending
        }
    };

    Ok(ScanState::HeaderSeen { pending })
}

/// An untagged line completes the pending item. Anything else, or any line
/// without a pending item, is kept as it is.
fn continue_line(pending: Option<Pending>, line: &str, playlist: &mut Playlist) -> Option<Pending> {
    match pending {
        Some(pending) if !line.starts_with('#') => {
            playlist.append_item(pending.complete(line));
            None
        }
        pending => {
            playlist.append_item(UnknownItem::new(line));
            pending
        }
    }
}

fn apply(
    directive: Directive,
    pending: Option<Pending>,
    line: &str,
    playlist: &mut Playlist,
) -> Option<Pending> {
    match directive {
        Directive::Append(item) => {
            playlist.append_item(item);
            pending
        }
        Directive::AwaitVariant(variant) => {
            if let Some(pending) = pending {
                pending.abandon(playlist);
            }
            Some(Pending::new(PendingItem::Variant(variant), line))
        }
        Directive::AwaitSegment(segment) => {
            if let Some(pending) = pending {
                pending.abandon(playlist);
            }
            Some(Pending::new(PendingItem::Segment(segment), line))
        }
        Directive::ProgramDateTime(time) => match pending {
            Some(Pending {
                item: PendingItem::Segment(mut segment),
                mut lines,
            }) => {
                segment.program_date_time = Some(time);
                lines.push(line.into());
                Some(Pending {
                    item: PendingItem::Segment(segment),
                    lines,
                })
            }
            pending => {
                playlist.append_item(time);
                pending
            }
        },
        Directive::ByteRange(byte_range) => match pending {
            Some(Pending {
                item: PendingItem::Segment(mut segment),
                mut lines,
            }) => {
                segment.byte_range = Some(byte_range);
                lines.push(line.into());
                Some(Pending {
                    item: PendingItem::Segment(segment),
                    lines,
                })
            }
            pending => {
                debug!("Keeping {} as an unknown item: no segment to apply it to", line);
                playlist.append_item(UnknownItem::new(line));
                pending
            }
        },
        Directive::Discontinuity => {
            playlist.append_item(DiscontinuityItem);
            pending
        }
        Directive::Header(field) => {
            apply_header(field, playlist);
            pending
        }
    }
}

fn apply_header(field: HeaderField, playlist: &mut Playlist) {
    match field {
        HeaderField::Version(version) => playlist.version = Some(version),
        HeaderField::MediaSequence(sequence) => playlist.sequence = Some(sequence),
        HeaderField::DiscontinuitySequence(sequence) => {
            playlist.discontinuity_sequence = Some(sequence)
        }
        HeaderField::TargetDuration(target) => playlist.target = Some(target),
        HeaderField::AllowCache(cache) => playlist.cache = Some(cache),
        HeaderField::PlaylistType(playlist_type) => playlist.playlist_type = Some(playlist_type),
        HeaderField::IndependentSegments => playlist.independent_segments = true,
        HeaderField::IFramesOnly => playlist.iframes_only = true,
        HeaderField::EndList => playlist.live = false,
    }
}

struct ParserImpl<T: BufRead> {
    reader: T,
    buffer: String,
    playlist: Playlist,
}

impl<T: BufRead> ParserImpl<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
            playlist: Playlist::default(),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }

            let line = self.buffer.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_owned()));
            }
        }
    }

    fn finish(&mut self, state: ScanState) -> Result<(), PlaylistError> {
        let ScanState::HeaderSeen { pending } = state else {
            return Err(PlaylistError::UnexpectedEof);
        };

        if let Some(pending) = pending {
            pending.abandon(&mut self.playlist);
        }

        if self.playlist.version.is_none() {
            self.playlist.version = Some(1);
        }

        if !self.playlist.is_valid() {
            return Err(PlaylistError::MixedPlaylist);
        }

        Ok(())
    }
}

impl<T: BufRead> ParserImplTrait for ParserImpl<T> {
    fn parse(&mut self) -> Result<(), PlaylistError> {
        self.playlist = Playlist {
            live: true,
            ..Default::default()
        };

        let mut state = ScanState::HeaderExpected;
        while let Some(line) = self.next_line()? {
            state = step(state, &line, &mut self.playlist)?;
        }

        self.finish(state)
    }

    fn get_result(&mut self) -> Playlist {
        take(&mut self.playlist)
    }
}
