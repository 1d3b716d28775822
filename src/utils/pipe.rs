/// Iterator that is either the untouched source or the result of an
/// optional adapter chain. Both arms yield the same item type.
pub enum Piped<I, R> {
    Passthrough(I),
    Transformed(R),
}

/// Conditionally applies an adapter to an iterator without boxing.
pub trait IteratorPipe: Iterator + Sized {
    fn pipe_if<F, R>(self, condition: bool, f: F) -> Piped<Self, R>
    where
        F: FnOnce(Self) -> R,
        R: Iterator<Item = Self::Item>;
}

impl<I: Iterator> IteratorPipe for I {
    fn pipe_if<F, R>(self, condition: bool, f: F) -> Piped<Self, R>
    where
        F: FnOnce(Self) -> R,
        R: Iterator<Item = Self::Item>,
    {
        if condition {
            Piped::Transformed(f(self))
        } else {
            Piped::Passthrough(self)
        }
    }
}

impl<I, R> Iterator for Piped<I, R>
where
    I: Iterator,
    R: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Piped::Passthrough(iter) => iter.next(),
            Piped::Transformed(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Piped::Passthrough(iter) => iter.size_hint(),
            Piped::Transformed(iter) => iter.size_hint(),
        }
    }
}
