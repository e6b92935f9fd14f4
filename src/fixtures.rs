//! Hand-built media byte fixtures for tests.

fn push_u16_le(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_u32_le(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_entry(buf: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    push_u16_le(buf, tag);
    push_u16_le(buf, typ);
    push_u32_le(buf, count);
    push_u32_le(buf, value);
}

fn push_stamp(buf: &mut Vec<u8>, stamp: &str) {
    assert_eq!(stamp.len(), 19, "exif datetime must be 19 chars");
    buf.extend_from_slice(stamp.as_bytes());
    buf.push(0);
}

/// Little-endian TIFF blob: IFD0 pointing at an Exif IFD that carries
/// DateTimeOriginal and optionally DateTimeDigitized as ASCII values.
fn tiff_with_stamps(original: &str, digitized: Option<&str>) -> Vec<u8> {
    const TAG_EXIF_IFD: u16 = 0x8769;
    const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
    const TAG_DATETIME_DIGITIZED: u16 = 0x9004;
    const TYPE_ASCII: u16 = 2;
    const TYPE_LONG: u16 = 4;

    let n_exif_entries: u32 = if digitized.is_some() { 2 } else { 1 };
    // header(8) + IFD0(2 + 12 + 4) = 26
    let exif_ifd_at: u32 = 26;
    let data_at: u32 = exif_ifd_at + 2 + 12 * n_exif_entries + 4;

    let mut t = Vec::new();
    // TIFF header, little endian, IFD0 at offset 8
    t.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00]);
    push_u32_le(&mut t, 8);

    // IFD0: one entry, the Exif IFD pointer
    push_u16_le(&mut t, 1);
    push_entry(&mut t, TAG_EXIF_IFD, TYPE_LONG, 1, exif_ifd_at);
    push_u32_le(&mut t, 0);

    // Exif IFD
    push_u16_le(&mut t, n_exif_entries as u16);
    push_entry(&mut t, TAG_DATETIME_ORIGINAL, TYPE_ASCII, 20, data_at);
    if digitized.is_some() {
        push_entry(&mut t, TAG_DATETIME_DIGITIZED, TYPE_ASCII, 20, data_at + 20);
    }
    push_u32_le(&mut t, 0);

    assert_eq!(t.len() as u32, data_at);
    push_stamp(&mut t, original);
    if let Some(d) = digitized {
        push_stamp(&mut t, d);
    }
    t
}

/// A minimal but valid JPEG whose Exif APP1 segment carries the given
/// capture timestamps.
pub fn jpeg_with_exif(original: &str, digitized: Option<&str>) -> Vec<u8> {
    let tiff = tiff_with_stamps(original, digitized);
    let payload_len = (2 + 6 + tiff.len()) as u16;

    let mut j = vec![0xFF, 0xD8]; // SOI
    j.extend_from_slice(&[0xFF, 0xE1]); // APP1
    j.extend_from_slice(&payload_len.to_be_bytes());
    j.extend_from_slice(b"Exif\0\0");
    j.extend_from_slice(&tiff);
    j.extend_from_slice(&[0xFF, 0xD9]); // EOI
    j
}

/// A JPEG with no Exif segment at all.
pub fn bare_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

/// The leading bytes of a QuickTime movie (ftyp box, qt brand).
pub fn quicktime_header() -> Vec<u8> {
    let mut m = vec![0x00, 0x00, 0x00, 0x14];
    m.extend_from_slice(b"ftypqt  ");
    m.extend_from_slice(&[0x00; 12]);
    m
}

/// The leading bytes of a BMP file.
pub fn bmp_header() -> Vec<u8> {
    let mut b = b"BM".to_vec();
    b.extend_from_slice(&[0x46, 0x00, 0x00, 0x00]);
    b.extend_from_slice(&[0x00; 12]);
    b
}
