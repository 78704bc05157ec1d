// core/src/gpx.rs
//
// Streaming scanner for GPX text. Only the elements the metrics need are
// recognised: <trkpt lat lon>, and inside it <ele>, <time> and the heart-rate,
// cadence and power extension elements. Names are matched on their local part,
// so `gpxtpx:hr`, `ns3:hr` and `hr` are the same field.

use chrono::{DateTime, NaiveDateTime};
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{TrackError, TrackResult};

/// One `<trkpt>` as written in the file, before any derived values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub ele: Option<f64>,
    pub time_ms: Option<i64>,
    pub hr: Option<u32>,
    pub cad: Option<u32>,
    pub power: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Ele,
    Time,
    HeartRate,
    Cadence,
    Power,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"ele" => Some(Field::Ele),
            b"time" => Some(Field::Time),
            b"hr" => Some(Field::HeartRate),
            b"cad" => Some(Field::Cadence),
            b"power" | b"PowerInWatts" => Some(Field::Power),
            _ => None,
        }
    }
}

/// A `<trkpt>` whose end tag has not been reached yet.
struct OpenPoint {
    point: TrackPoint,
    depth: usize,
    seen: [bool; 5],
    capture: Option<(Field, usize)>,
    text: String,
}

impl OpenPoint {
    fn new(point: TrackPoint, depth: usize) -> Self {
        Self { point, depth, seen: [false; 5], capture: None, text: String::new() }
    }

    // first occurrence of each field wins
    fn enter(&mut self, name: &[u8], depth: usize) {
        if self.capture.is_some() {
            return;
        }
        if let Some(field) = Field::from_local_name(name) {
            if !self.seen[field as usize] {
                self.seen[field as usize] = true;
                self.capture = Some((field, depth));
                self.text.clear();
            }
        }
    }

    fn text(&mut self, depth: usize, s: &str) {
        if matches!(self.capture, Some((_, d)) if d == depth) {
            self.text.push_str(s);
        }
    }

    fn leave(&mut self, depth: usize, pos: usize) -> TrackResult<()> {
        if let Some((field, d)) = self.capture {
            if d == depth {
                self.capture = None;
                let text = std::mem::take(&mut self.text);
                self.apply(field, text.trim(), pos)?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, field: Field, text: &str, pos: usize) -> TrackResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        match field {
            Field::Ele => {
                let ele = parse_finite(text)
                    .ok_or_else(|| TrackError::malformed(pos, format!("<ele> '{text}' is not a number")))?;
                self.point.ele = Some(ele);
            }
            Field::Time => {
                let ms = parse_timestamp_ms(text)
                    .ok_or_else(|| TrackError::malformed(pos, format!("<time> '{text}' is not a timestamp")))?;
                self.point.time_ms = Some(ms);
            }
            Field::HeartRate => self.point.hr = parse_count(text, "hr"),
            Field::Cadence => self.point.cad = parse_count(text, "cad"),
            Field::Power => self.point.power = parse_count(text, "power"),
        }
        Ok(())
    }
}

/// Scan `raw` and return every track-point in document order.
///
/// A well-formed `<gpx>` document without track-points gives an empty vector.
/// Anything the reader cannot make sense of is `MalformedInput`.
pub fn scan_track_points(raw: &str) -> TrackResult<Vec<TrackPoint>> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut points = Vec::new();
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut open: Option<OpenPoint> = None;

    loop {
        let pos = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| TrackError::malformed(reader.buffer_position() as usize, e.to_string()))?;

        match event {
            Event::Start(e) => {
                let name = e.local_name();
                if depth == 0 {
                    claim_root(&mut root_seen, name.as_ref(), pos)?;
                }
                depth += 1;
                if name.as_ref() == b"trkpt" {
                    if open.is_some() {
                        return Err(TrackError::malformed(pos, "nested <trkpt>"));
                    }
                    open = Some(OpenPoint::new(read_coordinates(&e, pos)?, depth));
                } else if let Some(p) = open.as_mut() {
                    p.enter(name.as_ref(), depth);
                }
            }
            Event::Empty(e) => {
                let name = e.local_name();
                if depth == 0 {
                    claim_root(&mut root_seen, name.as_ref(), pos)?;
                }
                if name.as_ref() == b"trkpt" {
                    if open.is_some() {
                        return Err(TrackError::malformed(pos, "nested <trkpt>"));
                    }
                    points.push(read_coordinates(&e, pos)?);
                }
            }
            Event::End(_) => {
                let closes_point = open.as_ref().is_some_and(|p| p.depth == depth);
                if closes_point {
                    if let Some(done) = open.take() {
                        points.push(done.point);
                    }
                } else if let Some(p) = open.as_mut() {
                    p.leave(depth, pos)?;
                }
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TrackError::malformed(pos, "end tag without start tag"))?;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| TrackError::malformed(pos, e.to_string()))?;
                if depth == 0 {
                    if text.trim_start_matches('\u{feff}').trim().is_empty() {
                        continue;
                    }
                    return Err(TrackError::malformed(pos, "text outside the root element"));
                }
                if let Some(p) = open.as_mut() {
                    p.text(depth, &text);
                }
            }
            Event::CData(c) => {
                if depth == 0 {
                    return Err(TrackError::malformed(pos, "CDATA outside the root element"));
                }
                let text = std::str::from_utf8(&c).map_err(|e| TrackError::malformed(pos, e.to_string()))?;
                if let Some(p) = open.as_mut() {
                    p.text(depth, text);
                }
            }
            Event::Eof => break,
            // declaration, comments, processing instructions, doctype
            _ => {}
        }
    }

    if depth > 0 {
        return Err(TrackError::malformed(raw.len(), "unexpected end of input inside an element"));
    }
    if !root_seen {
        return Err(TrackError::malformed(raw.len(), "no <gpx> root element"));
    }

    debug!("gpx: scanned {} track points", points.len());
    Ok(points)
}

fn claim_root(root_seen: &mut bool, name: &[u8], pos: usize) -> TrackResult<()> {
    if *root_seen {
        return Err(TrackError::malformed(pos, "more than one root element"));
    }
    if name != b"gpx" {
        return Err(TrackError::malformed(
            pos,
            format!("expected <gpx> root element, found <{}>", String::from_utf8_lossy(name)),
        ));
    }
    *root_seen = true;
    Ok(())
}

fn read_coordinates(e: &BytesStart<'_>, pos: usize) -> TrackResult<TrackPoint> {
    let mut lat = None;
    let mut lon = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| TrackError::malformed(pos, err.to_string()))?;
        let slot = match attr.key.local_name().as_ref() {
            b"lat" => &mut lat,
            b"lon" => &mut lon,
            _ => continue,
        };
        let value = attr.unescape_value().map_err(|err| TrackError::malformed(pos, err.to_string()))?;
        let parsed = parse_finite(value.trim()).ok_or_else(|| {
            TrackError::malformed(pos, format!("<trkpt> coordinate '{value}' is not a number"))
        })?;
        *slot = Some(parsed);
    }

    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(TrackPoint { lat, lon, ..Default::default() }),
        _ => Err(TrackError::malformed(pos, "<trkpt> without lat/lon attributes")),
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

// digits only, like the extension schema; anything else counts as absent
fn parse_count(text: &str, what: &str) -> Option<u32> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        debug!("gpx: ignoring non-integer <{what}> '{text}'");
        return None;
    }
    text.parse().ok()
}

/// RFC 3339 timestamp → epoch milliseconds. A timestamp without offset is read as UTC.
pub(crate) fn parse_timestamp_ms(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis())
}
