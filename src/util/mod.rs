mod hash_map_list;

pub use hash_map_list::HashMapList;
