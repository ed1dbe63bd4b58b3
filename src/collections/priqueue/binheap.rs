// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap implementation

use crate::collections::ItemPriQueue;

/// Heap item information.
struct BinHeapItem<K, V> {
    /// The key associated with this item.
    key: K,
    /// The value (priority) of the item.
    value: V,
    /// Position of this element on the heap.
    pos: usize,
}

/// Simple binary heap with decrease-key support.
///
/// Items are addressed by the index of their data slot. Slots of removed
/// items are reused by later insertions, so a handle is only valid as long as
/// its item is in the heap.
pub struct BinHeap<K, V> {
    /// The heap elements (slot indices).
    heap: Vec<usize>,
    /// The key, value and heap position for each slot.
    data: Vec<BinHeapItem<K, V>>,
    /// Slots that are not in use.
    free: Vec<usize>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            data: vec![],
            free: vec![],
        }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    K: Clone,
    V: PartialOrd + Clone,
{
    type Item = usize;

    fn clear(&mut self) {
        self.heap.clear();
        self.data.clear();
        self.free.clear();
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn value(&self, item: &usize) -> &V {
        &self.data[*item].value
    }

    fn push(&mut self, key: K, value: V) -> usize {
        let pos = self.heap.len();
        let item = if let Some(idx) = self.free.pop() {
            self.data[idx] = BinHeapItem { key, value, pos };
            idx
        } else {
            self.data.push(BinHeapItem { key, value, pos });
            self.data.len() - 1
        };
        self.heap.push(item);
        self.upheap(item);
        item
    }

    fn decrease_key(&mut self, item: &mut usize, value: V) -> bool {
        let idx = *item;
        if self.data[idx].value > value {
            self.data[idx].value = value;
            self.upheap(idx);
            true
        } else {
            false
        }
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap
        let min_idx = self.heap.swap_remove(0);
        self.free.push(min_idx);

        if let Some(&idx) = self.heap.first() {
            let n = self.heap.len();
            let value = self.data[idx].value.clone();
            let mut cur_pos = 0;
            loop {
                let left_pos = 2 * cur_pos + 1;
                let right_pos = left_pos + 1;
                let (next_pos, next_idx) = if left_pos >= n {
                    break;
                } else if right_pos >= n {
                    (left_pos, self.heap[left_pos])
                } else {
                    let left_idx = self.heap[left_pos];
                    let right_idx = self.heap[right_pos];
                    if self.data[left_idx].value < self.data[right_idx].value {
                        (left_pos, left_idx)
                    } else {
                        (right_pos, right_idx)
                    }
                };

                if value <= self.data[next_idx].value {
                    break;
                }

                self.heap[cur_pos] = next_idx;
                self.data[next_idx].pos = cur_pos;
                cur_pos = next_pos;
            }
            self.heap[cur_pos] = idx;
            self.data[idx].pos = cur_pos;
        }
        Some((self.data[min_idx].key.clone(), self.data[min_idx].value.clone()))
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd + Clone,
{
    /// Move the element `idx` up in the heap until its parent does not have a
    /// larger value or the root node is reached.
    ///
    /// Note that this function assumes that its value is smaller than the value
    /// of its children.
    fn upheap(&mut self, idx: usize) {
        let value = self.data[idx].value.clone();
        let mut cur_pos = self.data[idx].pos;
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            let parent_idx = self.heap[parent_pos];
            // Using > instead of >= moves the item up as far as possible, so
            // the most recently touched of several equal items comes first.
            if value > self.data[parent_idx].value {
                break;
            }
            self.heap[cur_pos] = parent_idx;
            self.data[parent_idx].pos = cur_pos;
            cur_pos = parent_pos;
        }
        self.data[idx].pos = cur_pos;
        self.heap[cur_pos] = idx;
    }
}
