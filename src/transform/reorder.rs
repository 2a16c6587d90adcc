use tracing::debug;

use crate::core::block::MafBlock;
use crate::core::row::MafRow;
use crate::parsing::maf::MafError;

impl MafBlock {
    /// Rebuild the block so it contains, in the given order, the row matched
    /// by each name (source id or species name).
    ///
    /// Names without a matching row are skipped. Rows not named are dropped.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Usage` if two names resolve to the same row. The
    /// block is left unchanged in that case.
    pub fn reorder<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), MafError> {
        let mut chosen = vec![false; self.rows.len()];
        let mut order = Vec::with_capacity(names.len().min(self.rows.len()));

        for name in names {
            let name = name.as_ref();
            let Some(pos) = self.position(name) else {
                continue;
            };
            if chosen[pos] {
                return Err(MafError::Usage(format!(
                    "species {name} appears twice in reorder list"
                )));
            }
            chosen[pos] = true;
            order.push(pos);
        }

        let mut slots: Vec<Option<MafRow>> = std::mem::take(&mut self.rows)
            .into_iter()
            .map(Some)
            .collect();
        let rows: Vec<MafRow> = order.iter().filter_map(|&pos| slots[pos].take()).collect();

        debug!(
            before = slots.len(),
            after = rows.len(),
            "Reordered block species"
        );
        self.replace_rows(rows);
        Ok(())
    }
}
