//! Accessors for [`Ngo`] records.

use uuid::Uuid;

use ujamaa_shared::models::Ngo;
use ujamaa_shared::views::NgoView;

use crate::store::DataStore;

impl DataStore {
    /// Insert or replace an NGO.
    pub fn put_ngo(&mut self, ngo: Ngo) {
        self.ngos.insert(ngo.id, ngo);
    }

    /// Look up an NGO by id.
    pub fn get_ngo(&self, id: Uuid) -> Option<&Ngo> {
        self.ngos.get(&id)
    }

    /// Mutable access for the fields designed as mutable (verification).
    pub fn get_ngo_mut(&mut self, id: Uuid) -> Option<&mut Ngo> {
        self.ngos.get_mut(&id)
    }

    /// All NGOs, newest first.
    pub fn list_ngos(&self) -> Vec<&Ngo> {
        let mut ngos: Vec<&Ngo> = self.ngos.values().collect();
        ngos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ngos
    }

    /// Number of users whose `ngo_id` references this NGO.
    ///
    /// Always recomputed from the live user set, never stored.
    pub fn ngo_member_count(&self, ngo_id: Uuid) -> usize {
        self.users
            .values()
            .filter(|u| u.ngo_id == Some(ngo_id))
            .count()
    }

    /// Filtered NGO listing with live member counts.
    ///
    /// `search` matches name or description, case-insensitively.
    /// `sdg_filter` matches a single SDG code within `sdg_targets`.
    pub fn list_ngo_views(
        &self,
        country: Option<&str>,
        search: Option<&str>,
        sdg_filter: Option<&str>,
    ) -> Vec<NgoView> {
        self.list_ngos()
            .into_iter()
            .filter(|n| country.map_or(true, |c| n.country.eq_ignore_ascii_case(c)))
            .filter(|n| {
                search.map_or(true, |s| {
                    let s = s.to_lowercase();
                    n.name.to_lowercase().contains(&s)
                        || n.description
                            .as_deref()
                            .map_or(false, |d| d.to_lowercase().contains(&s))
                })
            })
            .filter(|n| {
                sdg_filter.map_or(true, |code| {
                    n.sdg_targets
                        .as_deref()
                        .map_or(false, |targets| targets.split(',').any(|t| t.trim() == code))
                })
            })
            .map(|n| n.view(Some(&self.users)))
            .collect()
    }
}
