use super::Key;

impl Key for str {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl Key for String {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        (**self).code_points()
    }
}
