//! Viewport - manages the dockable dashboard sections

use ahash::AHashMap;
use egui::Ui;
use egui_dock::{DockArea, DockState, TabViewer};

use crate::section::{SectionContext, SectionView};

/// Hosts the three sections as dock tabs, keyed by section id.
pub struct Viewport {
    dock_state: DockState<&'static str>,
    sections: AHashMap<&'static str, Box<dyn SectionView>>,
}

impl Viewport {
    pub fn new(sections: Vec<Box<dyn SectionView>>) -> Self {
        let ids: Vec<&'static str> = sections.iter().map(|s| s.id()).collect();
        let mut map = AHashMap::default();
        for section in sections {
            map.insert(section.id(), section);
        }
        let dock_state = match ids.split_first() {
            Some((first, rest)) => {
                let mut state = DockState::new(vec![*first]);
                for id in rest {
                    state.push_to_first_leaf(*id);
                }
                state
            }
            None => DockState::new(vec![]),
        };
        Self {
            dock_state,
            sections: map,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, ctx: &SectionContext) {
        let available_rect = ui.available_rect_before_wrap();
        ui.allocate_ui(available_rect.size(), |ui| {
            DockArea::new(&mut self.dock_state)
                .show_close_buttons(false)
                .draggable_tabs(true)
                .show_inside(
                    ui,
                    &mut SectionTabViewer {
                        sections: &mut self.sections,
                        ctx,
                    },
                );
        });
    }
}

struct SectionTabViewer<'a> {
    sections: &'a mut AHashMap<&'static str, Box<dyn SectionView>>,
    ctx: &'a SectionContext,
}

impl<'a> TabViewer for SectionTabViewer<'a> {
    type Tab = &'static str;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match self.sections.get(tab) {
            Some(section) => section.title().into(),
            None => (*tab).into(),
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        if let Some(section) = self.sections.get_mut(tab) {
            egui::ScrollArea::vertical()
                .id_source(*tab)
                .show(ui, |ui| section.ui(self.ctx, ui));
        }
    }
}
