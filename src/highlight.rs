use bevy_ecs::prelude::*;

use crate::components::{Outline, Selectable};
use crate::config::Settings;
use crate::events::PointerEvent;

// The set of currently outlined props. The Outline components it manages
// are what the external renderer actually draws from.
#[derive(Resource, Debug, Default)]
pub struct Highlights {
    entities: Vec<Entity>,
}

impl Highlights {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    fn remove(&mut self, entity: Entity) {
        self.entities.retain(|e| *e != entity);
    }

    pub fn process_picks(
        mut commands: Commands,
        mut highlights: ResMut<Highlights>,
        settings: Res<Settings>,
        mut events: EventReader<PointerEvent>,
        selectable: Query<(), With<Selectable>>,
    ) {
        for event in events.iter() {
            let picked = match event {
                PointerEvent::Down { picked } => *picked,
                PointerEvent::Up => continue,
            };
            // Misses and non-selectable hits are not errors, just ignored.
            let Some(entity) = picked else { continue };
            if selectable.get(entity).is_err() {
                continue;
            }

            if highlights.contains(entity) {
                highlights.remove(entity);
                commands.entity(entity).remove::<Outline>();
            } else {
                if settings.exclusive_highlight {
                    for prev in std::mem::take(&mut highlights.entities) {
                        commands.entity(prev).remove::<Outline>();
                    }
                }
                highlights.entities.push(entity);
                commands.entity(entity).insert(Outline {
                    color: settings.highlight_color,
                    inner_glow: settings.highlight_inner_glow,
                });
            }
        }
    }
}
