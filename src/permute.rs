//! String permutations via Heap's algorithm.

/// Every ordering of a string's characters, one swap apart.
///
/// Characters are assumed distinct; repeated characters produce repeated
/// outputs.
#[derive(Debug, Clone)]
pub struct Permutations {
    items: Vec<char>,
    counters: Vec<usize>,
    i: usize,
    started: bool,
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            return Some(self.items.iter().collect());
        }

        while self.i < self.items.len() {
            let i = self.i;
            if self.counters[i] < i {
                let j = if i % 2 == 0 { 0 } else { self.counters[i] };
                self.items.swap(j, i);
                self.counters[i] += 1;
                self.i = 0;
                return Some(self.items.iter().collect());
            }
            self.counters[i] = 0;
            self.i += 1;
        }
        None
    }
}

pub fn permutations(chars: &str) -> Permutations {
    let items: Vec<char> = chars.chars().collect();
    Permutations {
        counters: vec![0; items.len()],
        items,
        i: 0,
        started: false,
    }
}
