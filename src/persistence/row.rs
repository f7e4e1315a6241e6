/// The append-only home of all row payloads of a [`super::Table`].
///
/// Every blob is addressed by the position it was pushed at. Positions are
/// dense, permanent and never reused; a blob may only be overwritten in place.
#[derive(Default)]
pub struct RowStore(Vec<Vec<u8>>);

impl RowStore {
    pub fn new() -> RowStore {
        RowStore(Vec::new())
    }

    pub fn push(&mut self, data: Vec<u8>) -> usize {
        //! Append a blob and return the position it now lives at.

        self.0.push(data);
        self.0.len() - 1
    }

    pub fn get(&self, position: usize) -> Option<&[u8]> {
        self.0.get(position).map(Vec::as_slice)
    }

    pub fn overwrite(&mut self, position: usize, data: &[u8]) -> bool {
        //! Replace the blob at `position` with a copy of `data`.
        //!
        //! Returns `false` if nothing lives at `position`.

        match self.0.get_mut(position) {
            Some(blob) => {
                blob.clear();
                blob.extend_from_slice(data);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
