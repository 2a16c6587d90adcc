//! Round-trip and coordinate-law tests for MAF blocks
//!
//! These exercise the public API end to end: parse, edit, print, re-parse.

use maf_tools::parsing::maf::{read_blocks_from_str, MafReader};
use maf_tools::{MafBlock, MafRow};

const SAMPLE: &str = "##maf version=1 scoring=tba.v8
# tba.v8 (((human chimp) baboon) (mouse rat))

a score=23262.0
s hg18.chr7    27578828 38 + 158545518 AAA-GGGAATGTTAACCAAATGA---ATTGTCTCTTACGGTG
s panTro1.chr6 28741140 38 + 161576975 AAA-GGGAATGTTAACCAAATGA---ATTGTCTCTTACGGTG
i panTro1.chr6 N 0 C 0
s baboon         116834 38 +   4622798 AAA-GGGAATGTTAACCAAATGA---GTTGTCTCTTATGGTG
q baboon                               99F-9999999999999999999---9999999999999999
s mm4.chr6     53215344 38 + 151104725 -AATGGGAATGTTAAGCAAACGA---ATTGTCTCTCAGTGTG
s rn3.chr4     81344243 40 + 187371129 -AA-GGGGATGCTAAGCCAATGAGTTGTTGTCTCTCAATGTG
e galGal2.chr1 1000 25 - 200000000 I

a score=5062.0
s hg18.chr7    27699739 6 + 158545518 TAAAGA
s panTro1.chr6 28862317 6 + 161576975 TAAAGA
s baboon         241163 6 +   4622798 TAAAGA
s mm4.chr6     53303881 6 + 151104725 TAAAGA
s rn3.chr4     81444246 6 + 187371129 taagga

a score=0
s hg18.chr7 27700000 0 + 158545518 ----
s mm4.chr6  53303990 0 + 151104725 ----
";

fn parse(text: &str) -> Vec<MafBlock> {
    read_blocks_from_str(text).expect("valid MAF")
}

fn non_gap(s: &str) -> u64 {
    s.bytes().filter(|&c| c != b'-').count() as u64
}

#[test]
fn test_round_trip_preserves_blocks() {
    let blocks = parse(SAMPLE);
    assert_eq!(blocks.len(), 3);

    let printed: String = blocks.iter().map(ToString::to_string).collect();
    let reparsed = parse(&printed);

    // The all-gap block is not printed; everything else comes back identical
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed[0], blocks[0]);
    assert_eq!(reparsed[1], blocks[1]);
}

#[test]
fn test_round_trip_after_edits() {
    let mut block = parse(SAMPLE).remove(0);
    block.sub_spec(&["galGal2"], false);
    block.reorder(&["mm4", "hg18", "baboon", "rn3"]).unwrap();
    block.sub_align(4, 30).unwrap();

    let reparsed = parse(&block.to_string());
    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed[0], block);
}

#[test]
fn test_worked_example_survives_round_trip() {
    let text = "a score=100\n\
                s hg18.chr1 100 9 + 2000 ACGT-ACGTT\n\
                s mm9.chr3 50 9 + 1500 ACGTAACGT\n";
    // Second row is one column short: reject
    assert!(read_blocks_from_str(text).unwrap_err().is_format());

    let text = "a score=100\n\
                s hg18.chr1 100 9 + 2000 ACGT-ACGTT\n\
                s mm9.chr3 50 10 + 1500 ACGTAACGTT\n";
    let mut block = parse(text).remove(0);
    block.sub_align(3, 7).unwrap();

    let hg = block.row("hg18").unwrap();
    assert_eq!(hg.sequence(), Some("GT-AC"));
    assert_eq!(hg.start(), 102);
    assert_eq!(hg.size(), 4);
    assert_eq!(block.row("mm9").unwrap().sequence(), Some("GTAAC"));

    let reparsed = parse(&block.to_string()).remove(0);
    assert_eq!(reparsed, block);
    assert_eq!(reparsed.header(), "a score=100");
}

#[test]
fn test_sub_align_coordinate_law() {
    let original = parse(SAMPLE).remove(0);
    let seqlen = original.seqlen();

    for (start, end) in [(1, 1), (2, 17), (5, 26), (24, seqlen), (seqlen, seqlen)] {
        let mut block = original.clone();
        block.sub_align(start, end).unwrap();
        assert_eq!(block.seqlen(), end - start + 1);

        for (before, after) in original.rows().iter().zip(block.rows()) {
            let Some(seq) = before.sequence() else {
                assert_eq!(before, after, "empty rows are untouched");
                continue;
            };
            let skipped = non_gap(&seq[..start - 1]);
            let kept = non_gap(&seq[start - 1..end]);
            assert_eq!(after.start(), before.start() + skipped, "{}", before.src());
            assert_eq!(after.size(), kept, "{}", before.src());
            assert_eq!(after.sequence(), Some(&seq[start - 1..end]));
            assert!(after.indel().is_none());
        }
    }
}

#[test]
fn test_sub_align_identity() {
    let original = parse(SAMPLE).remove(0);
    let mut block = original.clone();
    block.sub_align(1, original.seqlen()).unwrap();
    assert_eq!(block, original);
}

#[test]
fn test_quality_follows_sub_align() {
    let mut block = parse(SAMPLE).remove(0);
    block.sub_align(2, 6).unwrap();
    let baboon = block.row("baboon").unwrap();
    assert_eq!(baboon.sequence(), Some("AA-GG"));
    assert_eq!(baboon.quality(), Some("9F-99"));
}

#[test]
fn test_trim_outside_and_inside() {
    let original = parse(SAMPLE).remove(0);

    let mut block = original.clone();
    assert!(!block.trim(1, Some(27_578_828), Some("hg18"), 0).unwrap());
    assert!(!block.trim(27_578_867, None, Some("hg18"), 0).unwrap());
    assert_eq!(block, original);

    assert!(block
        .trim(27_578_829, Some(27_578_866), Some("hg18"), 0)
        .unwrap());
    assert_eq!(block, original);
}

#[test]
fn test_trim_to_genomic_window() {
    let mut block = parse(SAMPLE).remove(0);
    // hg18 bases 27578830..=27578834 (1-based) are in columns 2..=7, column 4 is a gap
    assert!(block
        .trim(27_578_830, Some(27_578_834), Some("hg18"), 0)
        .unwrap());
    assert_eq!(block.seqlen(), 6);

    let hg = block.row("hg18").unwrap();
    assert_eq!(hg.sequence(), Some("AA-GGG"));
    assert_eq!(hg.start(), 27_578_829);
    assert_eq!(hg.size(), 5);

    // mm4 starts with a gap, so it skips no bases on the left
    let mm = block.row("mm4").unwrap();
    assert_eq!(mm.sequence(), Some("AATGGG"));
    assert_eq!(mm.start(), 53_215_344);

    // The annotation on panTro1 no longer describes the block edges
    assert!(block.row("panTro1").unwrap().indel().is_none());
}

#[test]
fn test_index_consistent_after_structural_edits() {
    let mut block = parse(SAMPLE).remove(0);
    block.sub_spec(&["panTro1", "rn3.chr4"], false);
    block.reorder(&["galGal2", "baboon", "hg18", "mm4"]).unwrap();

    let srcs: Vec<&str> = block.rows().iter().map(MafRow::src).collect();
    assert_eq!(srcs, vec!["galGal2.chr1", "baboon", "hg18.chr7", "mm4.chr6"]);
    for (pos, row) in block.rows().iter().enumerate() {
        assert_eq!(block.position(row.src()), Some(pos));
        assert_eq!(block.position(row.spec_name()), Some(pos));
    }
    assert_eq!(block.position("panTro1"), None);
    assert_eq!(block.position("rn3"), None);
}

#[test]
fn test_reader_iterator_stops_at_first_error() {
    let text = "a\ns hg18.chr1 0 2 + 10 AC\n\na\nz bad line\n\na\ns hg18.chr1 0 2 + 10 AC\n";
    let mut reader = MafReader::new(text.as_bytes());
    assert!(reader.next().unwrap().is_ok());
    let err = reader.next().unwrap().unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().contains("line 5"));
}
