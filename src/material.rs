/// Wall material stored in the walls grid.
/// Only presence matters to the analyzers: any code above 0 is a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum WallMaterial {
    Empty = 0,
    Drywall = 1,
    Wood = 2,
    Stone = 3,
}

impl WallMaterial {
    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(WallMaterial::Empty),
            1 => Some(WallMaterial::Drywall),
            2 => Some(WallMaterial::Wood),
            3 => Some(WallMaterial::Stone),
            _ => None,
        }
    }
}

/// Check if a raw wall code means "a wall is present"
pub fn is_wall(code: i8) -> bool {
    code > WallMaterial::Empty.code()
}

/// Check if a raw wall code means "no wall"
pub fn is_empty(code: i8) -> bool {
    code == WallMaterial::Empty.code()
}

/// Terrain support under a cell, ordered from weakest to strongest.
///
/// Variant order matches code order, so the derived `Ord` agrees with
/// comparing raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum TerrainLevel {
    Mud = 0,
    Dirt = 1,
    Stone = 2,
    Bedrock = 3,
}

impl TerrainLevel {
    pub const WEAKEST: TerrainLevel = TerrainLevel::Mud;
    pub const STRONGEST: TerrainLevel = TerrainLevel::Bedrock;
    pub const ALL: [TerrainLevel; 4] = [
        TerrainLevel::Mud,
        TerrainLevel::Dirt,
        TerrainLevel::Stone,
        TerrainLevel::Bedrock,
    ];

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn from_code(code: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            TerrainLevel::Mud => "mud",
            TerrainLevel::Dirt => "dirt",
            TerrainLevel::Stone => "stone",
            TerrainLevel::Bedrock => "bedrock",
        }
    }
}
