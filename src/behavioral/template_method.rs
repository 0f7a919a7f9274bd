//! Template method: `GameAi::turn` fixes the order of a turn's steps, and each
//! race fills in or overrides the individual steps.

pub type Position = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Farm,
    Barracks,
    Stronghold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Scout,
    Warrior,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Collect(Structure),
    Build(Structure),
    Train(Unit),
    Scout(Position),
    Attack(Position),
    Hold,
}

#[derive(Debug, Clone, Default)]
pub struct World {
    pub center: Position,
    pub enemies: Vec<Position>,
    pub resources: u32,
}

impl World {
    pub fn closest_enemy(&self, from: Position) -> Option<Position> {
        self.enemies
            .iter()
            .copied()
            .min_by_key(|&(x, y)| (x - from.0).abs() + (y - from.1).abs())
    }
}

pub trait GameAi {
    fn base(&self) -> Position;
    fn structures(&self) -> &[Structure];
    fn build_structures(&mut self, world: &mut World) -> Vec<Action>;
    fn build_units(&mut self, world: &mut World) -> Vec<Action>;
    fn send_scouts(&mut self, target: Position) -> Vec<Action>;
    fn send_warriors(&mut self, target: Position) -> Vec<Action>;

    /// The template: steps always run in this order.
    fn turn(&mut self, world: &mut World) -> Vec<Action> {
        let mut actions = self.collect_resources(world);
        actions.extend(self.build_structures(world));
        actions.extend(self.build_units(world));
        actions.extend(self.attack(world));
        actions
    }

    fn collect_resources(&mut self, world: &mut World) -> Vec<Action> {
        let structures = self.structures().to_vec();
        world.resources += 10 * structures.len() as u32;
        structures.into_iter().map(Action::Collect).collect()
    }

    fn attack(&mut self, world: &mut World) -> Vec<Action> {
        match world.closest_enemy(self.base()) {
            Some(enemy) => self.send_warriors(enemy),
            None => self.send_scouts(world.center),
        }
    }
}

const BUILD_ORDER: [Structure; 3] = [Structure::Farm, Structure::Barracks, Structure::Stronghold];
const STRUCTURE_COST: u32 = 100;
const UNIT_COST: u32 = 50;
const WARRIORS_TO_ATTACK: u32 = 5;

#[derive(Debug, Default)]
pub struct OrcsAi {
    base: Position,
    structures: Vec<Structure>,
    scouts: u32,
    warriors: u32,
}

impl OrcsAi {
    pub fn new(base: Position) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn army(&self) -> (u32, u32) {
        (self.scouts, self.warriors)
    }
}

impl GameAi for OrcsAi {
    fn base(&self) -> Position {
        self.base
    }

    fn structures(&self) -> &[Structure] {
        &self.structures
    }

    // Farms, then barracks, then the stronghold.
    fn build_structures(&mut self, world: &mut World) -> Vec<Action> {
        let next = BUILD_ORDER.iter().find(|s| !self.structures.contains(s));
        match next {
            Some(&structure) if world.resources >= STRUCTURE_COST => {
                world.resources -= STRUCTURE_COST;
                self.structures.push(structure);
                vec![Action::Build(structure)]
            }
            _ => Vec::new(),
        }
    }

    fn build_units(&mut self, world: &mut World) -> Vec<Action> {
        if world.resources < UNIT_COST {
            return Vec::new();
        }
        world.resources -= UNIT_COST;
        if self.scouts == 0 {
            self.scouts += 1;
            vec![Action::Train(Unit::Scout)]
        } else {
            self.warriors += 1;
            vec![Action::Train(Unit::Warrior)]
        }
    }

    fn send_scouts(&mut self, target: Position) -> Vec<Action> {
        if self.scouts > 0 {
            vec![Action::Scout(target)]
        } else {
            Vec::new()
        }
    }

    fn send_warriors(&mut self, target: Position) -> Vec<Action> {
        if self.warriors > WARRIORS_TO_ATTACK {
            vec![Action::Attack(target)]
        } else {
            vec![Action::Hold]
        }
    }
}

/// Monsters neither gather nor build; they just go for the nearest enemy.
#[derive(Debug, Default)]
pub struct MonstersAi {
    lair: Position,
}

impl MonstersAi {
    pub fn new(lair: Position) -> Self {
        Self { lair }
    }
}

impl GameAi for MonstersAi {
    fn base(&self) -> Position {
        self.lair
    }

    fn structures(&self) -> &[Structure] {
        &[]
    }

    fn collect_resources(&mut self, _world: &mut World) -> Vec<Action> {
        Vec::new()
    }

    fn build_structures(&mut self, _world: &mut World) -> Vec<Action> {
        Vec::new()
    }

    fn build_units(&mut self, _world: &mut World) -> Vec<Action> {
        Vec::new()
    }

    fn send_scouts(&mut self, target: Position) -> Vec<Action> {
        vec![Action::Scout(target)]
    }

    fn send_warriors(&mut self, target: Position) -> Vec<Action> {
        vec![Action::Attack(target)]
    }
}

pub fn demo() -> Vec<String> {
    let mut world = World {
        center: (50, 50),
        enemies: Vec::new(),
        resources: 400,
    };
    let mut orcs = OrcsAi::new((0, 0));
    let mut monsters = MonstersAi::new((90, 90));

    let mut lines = Vec::new();
    for round in 1..=2 {
        lines.push(format!("orcs turn {round}: {:?}", orcs.turn(&mut world)));
    }
    world.enemies.push((10, 5));
    lines.push(format!("orcs turn 3: {:?}", orcs.turn(&mut world)));
    lines.push(format!("monsters turn: {:?}", monsters.turn(&mut world)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_run_in_template_order() {
        let mut world = World {
            resources: 150,
            ..World::default()
        };
        let mut orcs = OrcsAi::new((0, 0));
        let actions = orcs.turn(&mut world);
        assert_eq!(
            actions,
            vec![
                Action::Build(Structure::Farm),
                Action::Train(Unit::Scout),
                Action::Scout((0, 0)),
            ]
        );
        assert_eq!(world.resources, 0);
    }

    #[test]
    fn test_collect_uses_existing_structures() {
        let mut world = World::default();
        let mut orcs = OrcsAi::new((0, 0));
        orcs.structures = vec![Structure::Farm, Structure::Barracks];
        let actions = orcs.collect_resources(&mut world);
        assert_eq!(
            actions,
            vec![Action::Collect(Structure::Farm), Action::Collect(Structure::Barracks)]
        );
        assert_eq!(world.resources, 20);
    }

    #[test]
    fn test_orcs_hold_until_army_is_large_enough() {
        let mut orcs = OrcsAi::new((0, 0));
        orcs.warriors = 5;
        assert_eq!(orcs.send_warriors((1, 1)), vec![Action::Hold]);
        orcs.warriors = 6;
        assert_eq!(orcs.send_warriors((1, 1)), vec![Action::Attack((1, 1))]);
    }

    #[test]
    fn test_build_order_stops_after_stronghold() {
        let mut world = World {
            resources: 1000,
            ..World::default()
        };
        let mut orcs = OrcsAi::new((0, 0));
        for _ in 0..4 {
            orcs.build_structures(&mut world);
        }
        assert_eq!(orcs.structures(), &BUILD_ORDER);
        assert_eq!(world.resources, 700);
    }

    #[test]
    fn test_monsters_skip_economy() {
        let mut world = World {
            center: (5, 5),
            enemies: vec![(30, 30), (8, 8)],
            resources: 500,
        };
        let mut monsters = MonstersAi::new((10, 10));
        assert_eq!(monsters.turn(&mut world), vec![Action::Attack((8, 8))]);
        assert_eq!(world.resources, 500);

        world.enemies.clear();
        assert_eq!(monsters.turn(&mut world), vec![Action::Scout((5, 5))]);
    }

    #[test]
    fn test_closest_enemy() {
        let world = World {
            enemies: vec![(10, 0), (-2, 1), (3, 3)],
            ..World::default()
        };
        assert_eq!(world.closest_enemy((0, 0)), Some((-2, 1)));
        assert_eq!(World::default().closest_enemy((0, 0)), None);
    }

    #[test]
    fn test_demo() {
        let lines = demo();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].contains("Attack((10, 5))"));
    }
}
