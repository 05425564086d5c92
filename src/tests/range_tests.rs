// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::test_utils::config_test_logger;
    use crate::{RandomAccess, Window};

    fn first_and_last<R: RandomAccess + ?Sized>(range: &R) -> Option<(&R::Item, &R::Item)> {
        if range.is_empty() {
            return None;
        }
        Some((range.at(0), range.at(range.len() - 1)))
    }

    #[test]
    fn test_random_access_impls() {
        config_test_logger();

        let v = vec![1, 2, 3];
        assert_eq!(first_and_last(&v), Some((&1, &3)));
        assert_eq!(first_and_last(&v[1..]), Some((&2, &3)));
        assert_eq!(first_and_last(&[7u8; 4]), Some((&7, &7)));

        let mut deque: VecDeque<i32> = VecDeque::new();
        assert_eq!(first_and_last(&deque), None);
        deque.push_back(5);
        deque.push_front(4);
        assert_eq!(first_and_last(&deque), Some((&4, &5)));

        let empty: &[i32] = &[];
        assert!(RandomAccess::is_empty(empty));
    }

    #[test]
    fn test_window_operations() {
        config_test_logger();

        let mut window = Window::from_bounds(3, 17);
        assert_eq!(window, Window::new(3, 14));
        assert_eq!(window.end(), 17);
        assert_eq!(window.fragment_length(3), 4);
        assert_eq!(window.fragment_length(5), 2);

        // Last fragment of a 3-way split starts at 3 + 2 * 4 and keeps the remainder.
        window.advance(8);
        assert_eq!(window, Window::new(11, 6));
        assert_eq!(window.end(), 17);

        window.truncate(2);
        assert_eq!(window, Window::new(11, 2));
        assert!(!window.is_empty());

        let empty = Window::from_bounds(9, 9);
        assert!(empty.is_empty());
        assert_eq!(empty.fragment_length(2), 0);
    }
}
