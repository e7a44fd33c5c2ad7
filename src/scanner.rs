static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

// pos marks the last item of the pending token, -1 when nothing is accepted
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    // items already handed out through extract
    consumed: usize,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        let lacking = self.pos - (self.buf.len() as isize) + 1;
        if lacking > 0 {
            self.buf.extend(self.src.by_ref().take(lacking as usize));
        }
        // past the end we stay parked one slot after the last item
        self.pos = std::cmp::min(self.pos, self.buf.len() as isize);
        self.current()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // scan numbers like [0-9]+ or, with fractions enabled, [0-9]*(\.[0-9]+)?
    // a '.' without digits after it is left in place, a bare fraction
    // comes back with a leading zero
    pub fn scan_number(&mut self, fractions: bool) -> Option<String> {
        let backtrack = self.buffer_pos();
        if !self.skip_all(DIGITS) {
            if fractions && self.accept(&'.').is_some() && self.skip_all(DIGITS) {
                return Some(format!("0{}", self.extract_string()));
            }
            self.set_buffer_pos(backtrack);
            return None;
        }
        if fractions {
            let backtrack = self.buffer_pos();
            if self.accept(&'.').is_some() && !self.skip_all(DIGITS) {
                self.set_buffer_pos(backtrack);
            }
        }
        Some(self.extract_string())
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source,
            buf: Vec::new(),
            pos: -1,
            consumed: 0,
        }
    }

    pub fn buffer_pos(&self) -> isize {
        self.pos
    }

    // If position is out of bounds set_buffer_pos returns false
    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    // source index of the pending token's first item
    pub fn offset(&self) -> usize {
        self.consumed
    }

    pub fn current(&self) -> Option<I::Item> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos].clone())
    }

    // Consumes the buffer up to the cursor into a new token
    pub fn extract(&mut self) -> Vec<I::Item> {
        let split_point = std::cmp::min(self.pos + 1, self.buf.len() as isize).max(0);
        self.pos = -1;
        let mut remaining = self.buf.split_off(split_point as usize);
        std::mem::swap(&mut self.buf, &mut remaining);
        self.consumed += remaining.len();
        remaining
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    // Advance only if the next item is the expected one
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if &next == what {
                return Some(next);
            }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if any.contains(&next) {
                return Some(next);
            }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }
}
