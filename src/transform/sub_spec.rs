use std::collections::HashSet;

use tracing::debug;

use crate::core::block::MafBlock;

impl MafBlock {
    /// Keep only rows whose source id or species name is in `names` (when
    /// `include` is true), or only rows that match none of them (when false).
    ///
    /// Relative row order is preserved. Names matching no row are ignored.
    pub fn sub_spec<S: AsRef<str>>(&mut self, names: &[S], include: bool) {
        let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
        let before = self.rows.len();

        self.rows.retain(|row| {
            let listed = wanted.contains(row.src()) || wanted.contains(row.spec_name());
            listed == include
        });
        self.rebuild_index();

        debug!(
            before,
            after = self.rows.len(),
            include,
            "Filtered block species"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::core::block::tests::example_block;
    use crate::core::block::MafBlock;
    use crate::core::row::MafRow;
    use crate::core::types::Strand;

    fn assert_index_consistent(block: &MafBlock) {
        for (pos, row) in block.rows().iter().enumerate() {
            assert_eq!(block.position(row.src()), Some(pos));
        }
    }

    #[test]
    fn test_include() {
        let mut block = example_block();
        block.sub_spec(&["rn4", "hg18.chr1", "panTro2"], true);
        let srcs: Vec<&str> = block.rows().iter().map(MafRow::src).collect();
        assert_eq!(srcs, vec!["hg18.chr1", "rn4.chr7"]);
        assert_eq!(block.position("rn4"), Some(1));
        assert_eq!(block.position("mm9"), None);
        assert_index_consistent(&block);
    }

    #[test]
    fn test_exclude() {
        let mut block = example_block();
        block.sub_spec(&["hg18"], false);
        let srcs: Vec<&str> = block.rows().iter().map(MafRow::src).collect();
        assert_eq!(srcs, vec!["mm9.chr3", "rn4.chr7"]);
        assert_eq!(block.position("hg18"), None);
        assert_eq!(block.position("mm9"), Some(0));
        assert_eq!(block.reference_species(), Some("mm9"));
        assert_index_consistent(&block);
    }

    #[test]
    fn test_unknown_names_ignored() {
        let mut block = example_block();
        block.sub_spec(&["panTro2"], false);
        assert_eq!(block.num_rows(), 3);

        block.sub_spec::<&str>(&[], true);
        assert_eq!(block.num_rows(), 0);
        assert!(block.is_degenerate());
    }

    #[test]
    fn test_species_name_matches_every_chromosome() {
        let mut block = MafBlock::from_rows(
            "a",
            vec![
                MafRow::aligned("hg18.chr1", 0, Strand::Forward, 10, "AC"),
                MafRow::aligned("mm9.chr2", 0, Strand::Forward, 10, "AC"),
                MafRow::aligned("hg18.chr2", 0, Strand::Forward, 10, "GT"),
            ],
        )
        .unwrap();
        block.sub_spec(&["hg18"], true);
        assert_eq!(block.num_rows(), 2);
        assert_eq!(block.position("hg18.chr2"), Some(1));
        assert_index_consistent(&block);
    }
}
